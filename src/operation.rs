use std::str::FromStr;

use strum::{Display as StrumDisplay, EnumString};

use crate::error::{Result, RotatorError};
use crate::settings::SettingsOverride;

/// Names accepted by [`Operation::parse`]. Legacy method names are kept as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum OperationName {
    #[strum(to_string = "initialize", serialize = "init")]
    Initialize,
    #[strum(to_string = "next", serialize = "next_slide")]
    Next,
    #[strum(to_string = "selectSlide", serialize = "select_slide")]
    SelectSlide,
    #[strum(to_string = "start", serialize = "start_rotating")]
    Start,
    #[strum(to_string = "stop", serialize = "stop_rotating")]
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Initialize(SettingsOverride),
    Next,
    SelectSlide(usize),
    Start,
    Stop,
}

impl Operation {
    pub fn parse(name: &str, arg: Option<&str>) -> Result<Operation> {
        let op = OperationName::from_str(name.trim())
            .map_err(|_| RotatorError::UnknownOperation(name.to_string()))?;

        match op {
            OperationName::Initialize => {
                let overrides = match arg {
                    Some(json) => SettingsOverride::from_json(json)?,
                    None => SettingsOverride::default(),
                };
                Ok(Operation::Initialize(overrides))
            }
            OperationName::Next => Ok(Operation::Next),
            OperationName::SelectSlide => {
                let target = arg.ok_or(RotatorError::MissingArgument("selectSlide"))?;
                let index = target
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| RotatorError::InvalidTarget(target.to_string()))?;
                Ok(Operation::SelectSlide(index))
            }
            OperationName::Start => Ok(Operation::Start),
            OperationName::Stop => Ok(Operation::Stop),
        }
    }

    pub fn name(&self) -> OperationName {
        match self {
            Operation::Initialize(_) => OperationName::Initialize,
            Operation::Next => OperationName::Next,
            Operation::SelectSlide(_) => OperationName::SelectSlide,
            Operation::Start => OperationName::Start,
            Operation::Stop => OperationName::Stop,
        }
    }
}

impl FromStr for Operation {
    type Err = RotatorError;

    /// `name` or `name:arg`, e.g. `stop`, `selectSlide:2`, `initialize:{"padding":10}`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((name, arg)) => Operation::parse(name, Some(arg)),
            None => Operation::parse(s, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_aliases() {
        let cases = vec![
            ("next", Operation::Next),
            ("next_slide", Operation::Next),
            ("START", Operation::Start),
            ("start_rotating", Operation::Start),
            ("stop", Operation::Stop),
            ("init", Operation::Initialize(SettingsOverride::default())),
        ];

        for (name, expected) in cases {
            assert_eq!(Operation::parse(name, None).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let err = Operation::parse("destroy", None).unwrap_err();
        assert!(matches!(err, RotatorError::UnknownOperation(ref name) if name == "destroy"));
        assert_eq!(err.to_string(), "operation `destroy` does not exist on Rotator");
    }

    #[test]
    fn test_select_slide_argument() {
        assert_eq!("selectSlide:2".parse::<Operation>().unwrap(), Operation::SelectSlide(2));
        assert!(matches!(
            Operation::parse("selectSlide", None),
            Err(RotatorError::MissingArgument(_))
        ));
        assert!(matches!(
            Operation::parse("select_slide", Some("two")),
            Err(RotatorError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_initialize_with_options() {
        let op: Operation = r#"initialize:{"slide_duration_ms":3000}"#.parse().unwrap();
        assert_eq!(
            op,
            Operation::Initialize(SettingsOverride { slide_duration_ms: Some(3000), padding: None })
        );
        assert_eq!(op.name().to_string(), "initialize");
    }
}
