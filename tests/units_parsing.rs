//! 단위식/차원식 해석과 환산 테스트.
use approx::assert_relative_eq;
use ship_state_units::conversion::{self, ConversionError};
use ship_state_units::field::Assigned;
use ship_state_units::quantity::Quantity;
use ship_state_units::units::{
    convert_length, convert_velocity, Dimension, LengthUnit, TimeUnit, Unit, UnitError,
    VelocityUnit,
};

#[test]
fn dimensionality_strings() {
    assert_eq!(
        Dimension::parse("[length]/[time]").expect("velocity"),
        Dimension::VELOCITY
    );
    assert_eq!(Dimension::parse("[length]").expect("length"), Dimension::LENGTH);
    assert_eq!(
        Dimension::parse("[length] / [time] ** 2").expect("acceleration"),
        Dimension::LENGTH / Dimension::TIME.powi(2)
    );
    assert_eq!(
        Dimension::parse("[mass]*[length]/[time]^2").expect("force"),
        Dimension::MASS * Dimension::LENGTH / Dimension::TIME.powi(2)
    );
    assert_eq!(
        Dimension::parse("1/[time]").expect("frequency"),
        Dimension::TIME.powi(-1)
    );
    assert!(matches!(
        Dimension::parse("[colour]"),
        Err(UnitError::UnknownDimension(name)) if name == "colour"
    ));
    assert!(matches!(
        Dimension::parse("length"),
        Err(UnitError::Syntax { .. })
    ));
}

#[test]
fn dimension_display() {
    assert_eq!(Dimension::VELOCITY.to_string(), "[length] / [time]");
    assert_eq!(Dimension::AREA.to_string(), "[length]^2");
    assert_eq!(Dimension::DIMENSIONLESS.to_string(), "dimensionless");
}

#[test]
fn unit_expressions() {
    let knot = Unit::parse("knot").expect("knot");
    assert_eq!(knot.dimension(), Dimension::VELOCITY);
    assert_relative_eq!(knot.factor(), 1852.0 / 3600.0);

    let mph = Unit::parse("miles / hours").expect("mph");
    assert_relative_eq!(mph.factor(), 0.44704, max_relative = 1e-12);
    assert_eq!(mph.symbol(), "miles / hours");

    let accel = Unit::parse("m/s^2").expect("acceleration");
    assert_eq!(accel.dimension(), Dimension::LENGTH / Dimension::TIME.powi(2));

    let force = Unit::parse("kg*m/s**2").expect("force");
    assert_eq!(force.dimension(), Unit::parse("N").expect("newton").dimension());

    let grouped = Unit::parse("(km/h) * s").expect("grouped");
    assert_eq!(grouped.dimension(), Dimension::LENGTH);

    assert!(Unit::parse("degree").expect("deg").dimension().is_dimensionless());
}

#[test]
fn unknown_and_malformed_units() {
    assert_eq!(
        Unit::parse("furlong"),
        Err(UnitError::UnknownUnit("furlong".to_string()))
    );
    assert!(matches!(Unit::parse("m//s"), Err(UnitError::Syntax { .. })));
    assert!(matches!(Unit::parse("(m/s"), Err(UnitError::Syntax { .. })));
    assert!(matches!(Unit::parse(""), Err(UnitError::Syntax { .. })));
    assert!(matches!(Unit::parse("[length]"), Err(UnitError::Syntax { .. })));
}

#[test]
fn exponent_overflow_is_a_syntax_error() {
    for expr in ["m^100*m^100", "(m^100)^2", "m^-100/m^100", "m^127*m"] {
        assert!(
            matches!(Unit::parse(expr), Err(UnitError::Syntax { .. })),
            "{expr}"
        );
    }
    assert!(matches!(
        Dimension::parse("[length]^100 * [length]^100"),
        Err(UnitError::Syntax { .. })
    ));
    assert!(matches!(
        conversion::convert_quantity("1 m^100*m^100", "m"),
        Err(ConversionError::Unit(UnitError::Syntax { .. }))
    ));

    // 범위 끝까지는 허용
    let edge = Unit::parse("m^127").expect("i8::MAX exponent");
    assert_eq!(edge.dimension().exponents()[0], 127);
    assert_eq!(
        Unit::parse("m^100/m^100").expect("cancels").dimension(),
        Dimension::DIMENSIONLESS
    );
}

#[test]
fn plural_suffix_needs_a_real_stem() {
    assert_eq!(
        Unit::parse("as"),
        Err(UnitError::UnknownUnit("as".to_string()))
    );
    assert_eq!(
        Unit::parse("hours").expect("plural hour"),
        TimeUnit::Hour.unit()
    );
    assert_eq!(
        Unit::parse("Miles").expect("plural mile"),
        LengthUnit::Mile.unit()
    );
    assert_eq!(
        Unit::parse("knots").expect("plural knot"),
        VelocityUnit::Knot.unit()
    );
}

#[test]
fn quantity_check_and_to() {
    let q = 15.4 * VelocityUnit::Knot.unit();
    assert!(q.check("[length]/[time]").expect("check"));
    assert!(!q.check("[length]").expect("check"));

    let mps = q.to(&Unit::meter_per_second()).expect("to m/s");
    assert_relative_eq!(mps.magnitude(), 15.4 * 1852.0 / 3600.0, max_relative = 1e-12);

    let err = q.to(&LengthUnit::Meter.unit()).expect_err("incompatible");
    assert!(matches!(err, UnitError::Incompatible { .. }));
}

#[test]
fn quantity_parse_and_display() {
    let q = Quantity::parse("3048 yards").expect("yards");
    assert_relative_eq!(q.magnitude(), 3048.0);
    assert_eq!(q.unit().symbol(), "yd");
    assert_eq!(format!("{q:.1}"), "3048.0 yd");

    let sci = Quantity::parse("1.5e3 m").expect("scientific");
    assert_relative_eq!(sci.magnitude(), 1500.0);

    assert!(matches!(Quantity::parse("15.4"), Err(UnitError::Syntax { .. })));
    assert!(matches!(Quantity::parse("knot"), Err(UnitError::Syntax { .. })));
}

#[test]
fn quantity_arithmetic() {
    let a = 1.0 * LengthUnit::Kilometer.unit();
    let b = 500.0 * LengthUnit::Meter.unit();
    let sum = (a.clone() + b.clone()).expect("same dimension");
    assert_relative_eq!(sum.magnitude(), 1.5);
    assert_eq!(sum.unit().symbol(), "km");

    let diff = (a.clone() - b).expect("same dimension");
    assert_relative_eq!(diff.magnitude(), 0.5);

    let speed = a.clone() / (2.0 * TimeUnit::Hour.unit());
    assert_eq!(speed.dimensionality(), Dimension::VELOCITY);
    assert_relative_eq!(speed.base_magnitude(), 1000.0 / 7200.0, max_relative = 1e-12);

    assert!((a + 1.0 * TimeUnit::Second.unit()).is_err());
}

#[test]
fn per_kind_converters() {
    assert_relative_eq!(
        convert_length(3048.0, LengthUnit::Yard, LengthUnit::Meter),
        2787.0912,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_velocity(1.0, VelocityUnit::Knot, VelocityUnit::KilometerPerHour),
        1.852,
        max_relative = 1e-12
    );
}

#[test]
fn convert_between_unit_strings() {
    let kn = conversion::convert(7.9224, "m/s", "knot").expect("m/s -> knot");
    assert_relative_eq!(kn, 15.4, epsilon = 1e-3);

    let err = conversion::convert(1.0, "m", "s").expect_err("incompatible");
    assert!(matches!(
        err,
        ConversionError::Unit(UnitError::Incompatible { .. })
    ));
}

#[test]
fn measurement_input_parsing() {
    assert_eq!(
        conversion::parse_measurement("").expect("empty"),
        Assigned::Absent
    );
    assert_eq!(
        conversion::parse_measurement("none").expect("none"),
        Assigned::Absent
    );
    assert_eq!(
        conversion::parse_measurement("15.4").expect("plain"),
        Assigned::Plain(15.4)
    );
    match conversion::parse_measurement("15.4 knot").expect("tagged") {
        Assigned::Tagged(q) => assert_eq!(q.unit().dimension(), Dimension::VELOCITY),
        other => panic!("expected tagged value, got {other:?}"),
    }
    assert!(matches!(
        conversion::parse_measurement("fast"),
        Err(ConversionError::InvalidNumber(_))
    ));
    assert!(matches!(
        conversion::parse_measurement("15.4 furlong"),
        Err(ConversionError::Unit(UnitError::UnknownUnit(_)))
    ));
}
