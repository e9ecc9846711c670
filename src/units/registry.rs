//! 이름 → 단위 조회표.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::dimension::Dimension;
use super::unit::Unit;
use super::{AreaUnit, LengthUnit, MassUnit, TimeUnit, UnitError, VelocityUnit};

fn register(map: &mut HashMap<&'static str, Unit>, names: &'static [&'static str], unit: Unit) {
    for name in names {
        map.insert(*name, unit.clone());
    }
}

fn table() -> &'static HashMap<&'static str, Unit> {
    static TABLE: OnceLock<HashMap<&'static str, Unit>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = HashMap::new();
        for u in LengthUnit::ALL {
            register(&mut map, u.names(), u.unit());
        }
        for u in TimeUnit::ALL {
            register(&mut map, u.names(), u.unit());
        }
        for u in MassUnit::ALL {
            register(&mut map, u.names(), u.unit());
        }
        for u in AreaUnit::ALL {
            register(&mut map, u.names(), u.unit());
        }
        for u in VelocityUnit::ALL {
            register(&mut map, u.names(), u.unit());
        }

        let force = Dimension::MASS * Dimension::LENGTH / Dimension::TIME.powi(2);
        let energy = force * Dimension::LENGTH;
        register(&mut map, &["N", "newton"], Unit::new("N", 1.0, force));
        register(&mut map, &["J", "joule"], Unit::new("J", 1.0, energy));
        register(&mut map, &["W", "watt"], Unit::new("W", 1.0, energy / Dimension::TIME));
        register(&mut map, &["Pa", "pascal"], Unit::new("Pa", 1.0, force / Dimension::AREA));
        register(&mut map, &["Hz", "hertz"], Unit::new("Hz", 1.0, Dimension::TIME.powi(-1)));
        register(&mut map, &["K", "kelvin"], Unit::new("K", 1.0, Dimension::TEMPERATURE));
        register(&mut map, &["A", "ampere"], Unit::new("A", 1.0, Dimension::CURRENT));
        register(&mut map, &["mol", "mole"], Unit::new("mol", 1.0, Dimension::SUBSTANCE));
        register(&mut map, &["cd", "candela"], Unit::new("cd", 1.0, Dimension::LUMINOSITY));
        // 각도는 무차원
        register(
            &mut map,
            &["rad", "radian"],
            Unit::new("rad", 1.0, Dimension::DIMENSIONLESS),
        );
        register(
            &mut map,
            &["deg", "degree", "°"],
            Unit::new("deg", std::f64::consts::PI / 180.0, Dimension::DIMENSIONLESS),
        );
        register(&mut map, &["dimensionless"], Unit::dimensionless());
        map
    })
}

/// 이름으로 단위를 찾는다. 정확히 일치하지 않으면 복수형 어미(`s`, `es`)를 떼고,
/// 세 글자 이상이면 소문자로도 다시 찾아본다. 어미를 뗀 나머지는 세 글자 이상이어야 한다.
pub fn lookup(name: &str) -> Result<Unit, UnitError> {
    let table = table();
    let lowered = name.to_lowercase();
    let mut candidates = vec![name];
    candidates.extend(singular_stems(name));
    if name.chars().count() >= 3 {
        candidates.push(&lowered);
        candidates.extend(singular_stems(&lowered));
    }
    candidates
        .into_iter()
        .find_map(|c| table.get(c).cloned())
        .ok_or_else(|| UnitError::UnknownUnit(name.to_string()))
}

fn singular_stems(name: &str) -> impl Iterator<Item = &str> {
    [name.strip_suffix('s'), name.strip_suffix("es")]
        .into_iter()
        .flatten()
        .filter(|stem| stem.chars().count() >= 3)
}

/// 연산자·공백 없이 이름 하나로만 이루어진 식인지 확인한다.
pub fn is_single_name(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '°' | 'µ' | 'Å'))
}
