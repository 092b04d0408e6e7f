use crate::server::trans_param::TransParamEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Y,
    N,
}

impl YesNo {
    /// Registered transformer name.
    pub const NAME: &'static str = "YesNo";
}

impl TransParamEnum for YesNo {
    fn variants() -> &'static [Self] {
        &[Self::Y, Self::N]
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Y => "Y",
            Self::N => "N",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Y => "Yes",
            Self::N => "No",
        }
    }
}
