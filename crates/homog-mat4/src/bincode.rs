use crate::mat4::Mat4;

// Encoded as 16 row-major f64 values.
impl bincode::enc::Encode for Mat4 {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.0, encoder)
    }
}

impl<C> bincode::de::Decode<C> for Mat4 {
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let rows: [[f64; 4]; 4] = bincode::Decode::decode(decoder)?;
        Ok(Mat4(rows))
    }
}
