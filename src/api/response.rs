use serde::Deserialize;

/// Generic API envelope: the backend wraps every payload under `data`.
#[derive(Deserialize)]
pub struct Envelope<D> {
    pub data: D,
}
