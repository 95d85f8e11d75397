use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Men,
    Women,
    Kid,
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Men => write!(f, "men"),
            Gender::Women => write!(f, "women"),
            Gender::Kid => write!(f, "kid"),
            Gender::Unisex => write!(f, "unisex"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "kid" => Ok(Gender::Kid),
            "unisex" => Ok(Gender::Unisex),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}
