use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::U256;

// Serialized as the canonical lowercase hex string
impl Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        U256::from_hex(&value).map_err(de::Error::custom)
    }
}
