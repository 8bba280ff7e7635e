/// Error type for ubid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum UbidError {
    /// The string does not match the UBID grammar, or its centroid segment
    /// is not a decodable grid code.
    InvalidUbid(String),
    /// A bounding box corner or centroid could not be encoded as a grid code.
    InvalidBoundingBox(String),
    /// A degenerate UBID area (inverted or non-finite bounds) was supplied.
    InvalidArgument(String),
    /// The grid code length is not a supported precision.
    InvalidCodeLength(usize),
    /// The string is not a valid, full grid code.
    InvalidGridCode(String),
    /// A coordinate is NaN or infinite.
    InvalidCoordinate(String),
}

impl std::fmt::Display for UbidError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UbidError::InvalidUbid(code) => write!(f, "Invalid UBID: {}", code),
            UbidError::InvalidBoundingBox(msg) => write!(f, "Invalid bounding box: {}", msg),
            UbidError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            UbidError::InvalidCodeLength(len) => write!(f, "Invalid code length: {}", len),
            UbidError::InvalidGridCode(code) => write!(f, "Invalid grid code: {}", code),
            UbidError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
        }
    }
}

impl std::error::Error for UbidError {}
