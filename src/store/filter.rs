use std::fmt;

use crate::model::ShipState;

/// 필터에 쓸 수 있는 단위 검사 컬럼.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// m/s
    Speed,
    /// m
    Distance,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Speed => "speed",
            Column::Distance => "distance",
        }
    }

    /// 레코드의 필터식용 값(기준 단위 스칼라).
    pub fn predicate_value(self, state: &ShipState) -> Option<f64> {
        match self {
            Column::Speed => state.speed_field().to_predicate_value(),
            Column::Distance => state.distance_field().to_predicate_value(),
        }
    }

    pub fn lt(self, bound: f64) -> Filter {
        Filter::compare(self, CmpOp::Lt, bound)
    }

    pub fn le(self, bound: f64) -> Filter {
        Filter::compare(self, CmpOp::Le, bound)
    }

    pub fn gt(self, bound: f64) -> Filter {
        Filter::compare(self, CmpOp::Gt, bound)
    }

    pub fn ge(self, bound: f64) -> Filter {
        Filter::compare(self, CmpOp::Ge, bound)
    }

    pub fn equals(self, bound: f64) -> Filter {
        Filter::compare(self, CmpOp::Eq, bound)
    }
}

/// 비교 연산자.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl CmpOp {
    pub fn sql(self) -> &'static str {
        match self {
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Eq => "=",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Eq => lhs == rhs,
        }
    }
}

/// 저장소 필터식.
///
/// 경계값은 단위 없는 `f64`이며 컬럼의 기준 단위(m/s, m) 값과 그대로 비교된다.
/// 다른 단위로 생각한 경계값은 호출하는 쪽에서 미리 환산해야 한다.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare {
        column: Column,
        op: CmpOp,
        bound: f64,
    },
    And(Box<Filter>, Box<Filter>),
}

impl Filter {
    pub fn compare(column: Column, op: CmpOp, bound: f64) -> Self {
        Filter::Compare { column, op, bound }
    }

    pub fn and(self, other: Filter) -> Self {
        Filter::And(Box::new(self), Box::new(other))
    }

    /// SQL WHERE 절과 바인딩할 경계값 목록.
    pub fn to_sql(&self) -> (String, Vec<f64>) {
        let mut params = Vec::new();
        let clause = self.write_sql(&mut params);
        (clause, params)
    }

    fn write_sql(&self, params: &mut Vec<f64>) -> String {
        match self {
            Filter::Compare { column, op, bound } => {
                params.push(*bound);
                format!("{} {} ?{}", column.name(), op.sql(), params.len())
            }
            Filter::And(lhs, rhs) => {
                let lhs = lhs.write_sql(params);
                let rhs = rhs.write_sql(params);
                format!("({lhs} AND {rhs})")
            }
        }
    }

    /// 레코드가 필터를 만족하는지 검사한다. 비어 있는 필드는 SQL의 NULL처럼 어떤 비교도 만족하지 않는다.
    pub fn matches(&self, state: &ShipState) -> bool {
        match self {
            Filter::Compare { column, op, bound } => column
                .predicate_value(state)
                .is_some_and(|value| op.apply(value, *bound)),
            Filter::And(lhs, rhs) => lhs.matches(state) && rhs.matches(state),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Compare { column, op, bound } => {
                write!(f, "{} {} {bound}", column.name(), op.sql())
            }
            Filter::And(lhs, rhs) => write!(f, "({lhs} AND {rhs})"),
        }
    }
}
