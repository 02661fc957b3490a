use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub result: f64,
}
