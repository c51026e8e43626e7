use crate::domain::entities::Edge;
use crate::domain::errors::SerializationError;

/// Edge codec using bincode.
#[derive(Default, Clone, Copy)]
pub struct BincodeEdgeCodec;

impl BincodeEdgeCodec {
    pub fn encode(&self, edge: &Edge) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(edge).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    pub fn decode(&self, data: &[u8]) -> Result<Edge, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
