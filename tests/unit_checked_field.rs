//! 속도/거리 단위 검사 필드 회귀 테스트.
use approx::assert_relative_eq;
use ship_state_units::field::{Assigned, Distance, FieldError, Speed, UnitChecked};
use ship_state_units::model::ShipState;
use ship_state_units::quantity::Quantity;
use ship_state_units::units::{
    AreaUnit, Dimension, LengthUnit, MassUnit, TimeUnit, Unit, VelocityUnit,
};

const KNOT_MPS: f64 = 1852.0 / 3600.0;

#[test]
fn knots_are_stored_as_meters_per_second() {
    let mut speed = UnitChecked::<Speed>::new();
    speed.set(15.4 * VelocityUnit::Knot.unit()).expect("knot speed");

    let raw = speed.raw().expect("stored scalar");
    assert_relative_eq!(raw, 15.4 * KNOT_MPS, max_relative = 1e-12);
    assert_relative_eq!(raw, 7.9224, epsilon = 1e-4);

    let read = speed.get().expect("speed");
    assert_eq!(read.unit().symbol(), "m/s");
    assert_relative_eq!(read.magnitude(), raw);

    let back = read.to(&VelocityUnit::Knot.unit()).expect("to knot");
    assert_relative_eq!(back.magnitude(), 15.4, max_relative = 1e-12);
}

#[test]
fn yards_are_stored_as_meters() {
    let mut distance = UnitChecked::<Distance>::new();
    distance
        .set(3048.0 * LengthUnit::Yard.unit())
        .expect("yard distance");
    assert_relative_eq!(distance.raw().expect("raw"), 2787.0912, max_relative = 1e-12);
    assert_eq!(distance.get().expect("distance").unit().symbol(), "m");
}

#[test]
fn any_velocity_unit_round_trips_through_canonical_storage() {
    let inputs = [
        10.2 * (LengthUnit::Mile.unit() / TimeUnit::Hour.unit()),
        10.2 * (LengthUnit::Angstrom.unit() / TimeUnit::Year.unit()),
        3.0 * VelocityUnit::KilometerPerHour.unit(),
        42.0 * Unit::parse("ft/min").expect("ft/min"),
        0.5 * Unit::parse("km / s").expect("km/s"),
    ];
    for input in inputs {
        let mut speed = UnitChecked::<Speed>::new();
        speed.set(input.clone()).expect("valid speed");
        assert_relative_eq!(
            speed.raw().expect("raw"),
            input.base_magnitude(),
            max_relative = 1e-12
        );
        let back = speed
            .get_in(input.unit())
            .expect("compatible")
            .expect("set");
        assert_relative_eq!(back.magnitude(), input.magnitude(), max_relative = 1e-9);
    }
}

#[test]
fn mile_per_hour_matches_named_unit() {
    let mut speed = UnitChecked::<Speed>::new();
    speed
        .set(Quantity::parse("10.2 miles / hours").expect("parse"))
        .expect("set");
    assert_relative_eq!(speed.raw().expect("raw"), 4.559808, max_relative = 1e-12);
}

#[test]
fn plain_number_is_rejected_with_missing_unit() {
    let mut speed = UnitChecked::<Speed>::new();
    let err = speed.set(15.4).expect_err("plain number");
    assert_eq!(
        err,
        FieldError::MissingUnit {
            field: "speed",
            value: 15.4
        }
    );

    let mut distance = UnitChecked::<Distance>::new();
    assert!(matches!(
        distance.set(Assigned::Plain(3048.0)),
        Err(FieldError::MissingUnit {
            field: "distance",
            ..
        })
    ));
}

#[test]
fn wrong_dimension_speed_is_rejected() {
    let rejected = [
        15.4 * TimeUnit::Hour.unit(),
        15.4 * Unit::parse("m/degree").expect("m/degree"),
        15.4 * Unit::dimensionless(),
        15.4 * LengthUnit::Meter.unit(),
    ];
    for value in rejected {
        let mut speed = UnitChecked::<Speed>::new();
        match speed.set(value.clone()) {
            Err(FieldError::Dimensionality {
                field,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(field, "speed");
                assert_eq!(expected, Dimension::VELOCITY);
                assert_eq!(actual, value.dimensionality());
            }
            other => panic!("expected dimensionality error for {value}, got {other:?}"),
        }
        assert!(speed.get().is_none());
    }
}

#[test]
fn wrong_dimension_distance_is_rejected() {
    let rejected = [
        10.0 * Unit::parse("newton").expect("newton"),
        10.0 * MassUnit::Tonne.unit(),
        10.0 * AreaUnit::SquareMeter.unit(),
        10.0 * TimeUnit::Second.unit(),
    ];
    for value in rejected {
        let mut distance = UnitChecked::<Distance>::new();
        assert!(
            matches!(
                distance.set(value.clone()),
                Err(FieldError::Dimensionality { field: "distance", .. })
            ),
            "{value} should be rejected"
        );
    }
}

#[test]
fn rejected_write_keeps_previous_value() {
    let mut state = ShipState::default()
        .with_distance(19.2 * LengthUnit::Kilometer.unit())
        .expect("km distance");

    assert!(state.set_distance(10.0 * MassUnit::Tonne.unit()).is_err());
    assert!(state.set_distance(5.0).is_err());

    assert_relative_eq!(
        state.distance().expect("distance").magnitude(),
        19_200.0,
        max_relative = 1e-12
    );
}

#[test]
fn non_finite_values_are_rejected() {
    let mut distance = UnitChecked::<Distance>::new();
    distance.set(1.0 * LengthUnit::Meter.unit()).expect("meter");

    let err = distance
        .set(f64::NAN * LengthUnit::Meter.unit())
        .expect_err("nan distance");
    assert!(matches!(err, FieldError::NonFinite { field: "distance", .. }));

    let err = distance
        .set(f64::INFINITY * LengthUnit::Kilometer.unit())
        .expect_err("infinite distance");
    assert!(matches!(err, FieldError::NonFinite { .. }));

    // 입력은 유한하지만 환산 결과가 넘치는 경우
    let err = distance
        .set(f64::MAX * LengthUnit::LightYear.unit())
        .expect_err("overflowing distance");
    assert!(matches!(err, FieldError::NonFinite { .. }));

    assert_eq!(distance.raw(), Some(1.0));

    let mut speed = UnitChecked::<Speed>::new();
    assert!(matches!(
        speed.set(f64::NEG_INFINITY * VelocityUnit::Knot.unit()),
        Err(FieldError::NonFinite { field: "speed", .. })
    ));
    assert!(!speed.is_set());
}

#[test]
fn absent_clears_and_unset_reads_absent() {
    let mut speed = UnitChecked::<Speed>::new();
    assert!(speed.get().is_none());
    assert!(speed.to_predicate_value().is_none());

    speed.set(2.0 * VelocityUnit::MeterPerSecond.unit()).expect("set");
    assert!(speed.is_set());

    speed.set(Assigned::Absent).expect("clear");
    assert!(speed.get().is_none());
    assert!(speed.raw().is_none());

    speed.set(2.0 * VelocityUnit::MeterPerSecond.unit()).expect("set");
    speed.set(None::<Quantity>).expect("clear via option");
    assert!(speed.get().is_none());
}

#[test]
fn predicate_value_is_raw_canonical_scalar() {
    let mut distance = UnitChecked::<Distance>::new();
    distance
        .set(3048.0 * LengthUnit::Yard.unit())
        .expect("yard distance");
    // 야드가 아니라 미터 값이 나온다
    let predicate = distance.to_predicate_value().expect("predicate");
    assert_relative_eq!(predicate, 2787.0912, max_relative = 1e-12);
    assert!(predicate < 3000.0);
}

#[test]
fn ship_state_builder_normalizes_both_fields() {
    let state = ShipState::default()
        .with_speed(15.4 * VelocityUnit::Knot.unit())
        .and_then(|s| s.with_distance(0.02 * LengthUnit::LightYear.unit()))
        .expect("valid state");
    assert_relative_eq!(
        state.speed_field().raw().expect("speed"),
        15.4 * KNOT_MPS,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        state.distance_field().raw().expect("distance"),
        0.02 * 9_460_730_472_580_800.0,
        max_relative = 1e-12
    );
}
