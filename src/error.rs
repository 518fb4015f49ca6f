use crate::Cipher;

/// The reasons a cipher field cannot be resolved to one of the
/// registered [`EncryptionAlgorithm`](crate::EncryptionAlgorithm)s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncryptionError {
    /// The value does not fit in the 6-bit cipher field.
    Invalid(u64),
    /// The value lies in the band reserved by SCTE 35 (4 through 31).
    Reserved(u8),
    /// The value identifies a user private algorithm (32 through 63).
    UserPrivate(u8),
}

impl EncryptionError {
    /// The raw cipher field value that was rejected.
    pub fn value(&self) -> u64 {
        match self {
            EncryptionError::Invalid(v) => *v,
            EncryptionError::Reserved(v) | EncryptionError::UserPrivate(v) => u64::from(*v),
        }
    }
}

impl TryFrom<Cipher> for EncryptionError {
    type Error = ();

    fn try_from(value: Cipher) -> Result<Self, Self::Error> {
        match value {
            Cipher::Algorithm(_) => Err(()),
            Cipher::Reserved(v) => Ok(Self::Reserved(v)),
            Cipher::UserPrivate(v) => Ok(Self::UserPrivate(v)),
            Cipher::Invalid(v) => Ok(Self::Invalid(v)),
        }
    }
}

impl core::fmt::Display for EncryptionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncryptionError::Invalid(v) => {
                write!(f, "Cipher value {v} does not fit in a 6-bit field")
            }
            EncryptionError::Reserved(v) => write!(f, "Cipher value {v} is reserved"),
            EncryptionError::UserPrivate(v) => {
                write!(f, "Cipher value {v} identifies a user private algorithm")
            }
        }
    }
}

impl std::error::Error for EncryptionError {}
