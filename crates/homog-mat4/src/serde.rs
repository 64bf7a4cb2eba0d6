use serde::{Deserialize, Serialize};

use crate::mat4::Mat4;

// Serialized as its 4 rows.
impl Serialize for Mat4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Mat4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <[[f64; 4]; 4]>::deserialize(deserializer)?;
        Ok(Mat4(rows))
    }
}
