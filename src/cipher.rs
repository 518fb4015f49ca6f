//! The cipher registry of SCTE 35 section 11.3.

/// One of the encryption algorithms registered by SCTE 35.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncryptionAlgorithm {
    /// The payload is not encrypted.
    None,
    /// DES in ECB mode (section 11.3.1).
    DesEcb,
    /// DES in CBC mode (section 11.3.2).
    DesCbc,
    /// Triple DES EDE3 in ECB mode (section 11.3.3).
    TripleDes,
}

impl EncryptionAlgorithm {
    pub const NONE: u32 = 0x00;
    pub const DES_ECB: u32 = 0x01;
    pub const DES_CBC: u32 = 0x02;
    pub const TRIPLE_DES: u32 = 0x03;

    pub const ALL: [Self; 4] = [Self::None, Self::DesEcb, Self::DesCbc, Self::TripleDes];

    pub fn name(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::None => "none",
            EncryptionAlgorithm::DesEcb => "DES – ECB mode",
            EncryptionAlgorithm::DesCbc => "DES – CBC mode",
            EncryptionAlgorithm::TripleDes => "Triple DES EDE3 – ECB mode",
        }
    }
}

impl From<EncryptionAlgorithm> for u32 {
    fn from(value: EncryptionAlgorithm) -> Self {
        match value {
            EncryptionAlgorithm::None => EncryptionAlgorithm::NONE,
            EncryptionAlgorithm::DesEcb => EncryptionAlgorithm::DES_ECB,
            EncryptionAlgorithm::DesCbc => EncryptionAlgorithm::DES_CBC,
            EncryptionAlgorithm::TripleDes => EncryptionAlgorithm::TRIPLE_DES,
        }
    }
}

impl TryFrom<u32> for EncryptionAlgorithm {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let value = match value {
            Self::NONE => Self::None,
            Self::DES_ECB => Self::DesEcb,
            Self::DES_CBC => Self::DesCbc,
            Self::TRIPLE_DES => Self::TripleDes,
            _ => return Err(()),
        };

        Ok(value)
    }
}

impl From<EncryptionAlgorithm> for u8 {
    fn from(value: EncryptionAlgorithm) -> Self {
        // Registry values are all below 4.
        u32::from(value) as u8
    }
}

impl TryFrom<u8> for EncryptionAlgorithm {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(u32::from(value))
    }
}

impl core::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The classification of a 6-bit cipher field value.
///
/// Every unsigned value maps to exactly one variant, so classification
/// never fails. Values that cannot come off the wire (anything above
/// [`Cipher::MAX`]) are reported as [`Cipher::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cipher {
    Algorithm(EncryptionAlgorithm),
    Reserved(u8),
    /// Values 32 through 63 are left for "User private" algorithms
    /// (section 11.3.4).
    UserPrivate(u8),
    Invalid(u64),
}

impl Cipher {
    /// The largest value the 6-bit cipher field can hold.
    pub const MAX: u8 = 63;
    pub const FIRST_RESERVED: u8 = 4;
    pub const LAST_RESERVED: u8 = 31;
    pub const FIRST_USER_PRIVATE: u8 = 32;

    pub fn classify<T: Into<u64>>(code: T) -> Self {
        let code: u64 = code.into();

        match code {
            0 => Self::Algorithm(EncryptionAlgorithm::None),
            1 => Self::Algorithm(EncryptionAlgorithm::DesEcb),
            2 => Self::Algorithm(EncryptionAlgorithm::DesCbc),
            3 => Self::Algorithm(EncryptionAlgorithm::TripleDes),
            4..=31 => Self::Reserved(code as u8),
            32..=63 => Self::UserPrivate(code as u8),
            _ => Self::Invalid(code),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Algorithm(algorithm) => algorithm.name(),
            Cipher::Reserved(_) => "reserved",
            Cipher::UserPrivate(_) => "user private",
            Cipher::Invalid(_) => "invalid",
        }
    }

    /// The raw cipher field value this classification was made from.
    pub fn value(&self) -> u64 {
        match self {
            Cipher::Algorithm(algorithm) => u64::from(u32::from(*algorithm)),
            Cipher::Reserved(v) | Cipher::UserPrivate(v) => u64::from(*v),
            Cipher::Invalid(v) => *v,
        }
    }

    pub fn algorithm(&self) -> Option<EncryptionAlgorithm> {
        match self {
            Cipher::Algorithm(algorithm) => Some(*algorithm),
            _ => None,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Cipher::Reserved(_))
    }

    pub fn is_user_private(&self) -> bool {
        matches!(self, Cipher::UserPrivate(_))
    }

    /// Whether the value fits in the 6-bit cipher field.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Cipher::Invalid(_))
    }
}

/// Classify `code` and return its display label.
pub fn classify<T: Into<u64>>(code: T) -> &'static str {
    Cipher::classify(code).name()
}

impl From<u8> for Cipher {
    fn from(value: u8) -> Self {
        Self::classify(value)
    }
}

impl From<u32> for Cipher {
    fn from(value: u32) -> Self {
        Self::classify(value)
    }
}

impl From<EncryptionAlgorithm> for Cipher {
    fn from(value: EncryptionAlgorithm) -> Self {
        Self::Algorithm(value)
    }
}

impl TryFrom<Cipher> for u8 {
    type Error = ();

    fn try_from(value: Cipher) -> Result<Self, Self::Error> {
        match value {
            Cipher::Algorithm(algorithm) => Ok(algorithm.into()),
            Cipher::Reserved(v) | Cipher::UserPrivate(v) => Ok(v),
            Cipher::Invalid(_) => Err(()),
        }
    }
}

impl core::fmt::Display for Cipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify(0u8), "none");
        assert_eq!(classify(1u8), "DES – ECB mode");
        assert_eq!(classify(2u8), "DES – CBC mode");
        assert_eq!(classify(3u8), "Triple DES EDE3 – ECB mode");
        assert_eq!(classify(4u8), "reserved");
        assert_eq!(classify(31u8), "reserved");
        assert_eq!(classify(32u8), "user private");
        assert_eq!(classify(63u8), "user private");
        assert_eq!(classify(64u8), "invalid");
        assert_eq!(classify(255u8), "invalid");
    }

    #[test]
    fn wide_values_are_invalid() {
        assert_eq!(Cipher::classify(64u32), Cipher::Invalid(64));
        assert_eq!(Cipher::classify(u32::MAX), Cipher::Invalid(u32::MAX as u64));
        assert_eq!(Cipher::classify(u64::MAX), Cipher::Invalid(u64::MAX));
        assert_eq!(classify(u64::MAX), "invalid");
    }

    #[test]
    fn bands_depend_on_membership_only() {
        let labels = [
            "none",
            "DES – ECB mode",
            "DES – CBC mode",
            "Triple DES EDE3 – ECB mode",
            "reserved",
            "user private",
        ];

        for code in 0..=Cipher::MAX {
            let label = classify(code);
            assert!(labels.contains(&label), "{code} -> {label}");
            assert_eq!(label, classify(code));
        }

        for code in Cipher::FIRST_RESERVED..=Cipher::LAST_RESERVED {
            assert_eq!(Cipher::classify(code), Cipher::Reserved(code));
            assert!(Cipher::classify(code).is_reserved());
        }

        for code in Cipher::FIRST_USER_PRIVATE..=Cipher::MAX {
            assert_eq!(Cipher::classify(code), Cipher::UserPrivate(code));
            assert!(Cipher::classify(code).is_user_private());
        }
    }

    #[test]
    fn value_is_preserved() {
        for code in 0..=100u64 {
            assert_eq!(Cipher::classify(code).value(), code);
        }
    }

    #[test]
    fn wire_value() {
        assert_eq!(u8::try_from(Cipher::from(EncryptionAlgorithm::DesCbc)), Ok(2));
        assert_eq!(u8::try_from(Cipher::from(40u8)), Ok(40));
        assert_eq!(u8::try_from(Cipher::from(64u32)), Err(()));
        assert!(!Cipher::from(64u32).is_valid());
        assert!(Cipher::from(63u8).is_valid());
    }

    #[test]
    fn algorithm_numeric_domains() {
        for algorithm in EncryptionAlgorithm::ALL {
            let wide = u32::from(algorithm);
            let narrow = u8::from(algorithm);

            assert_eq!(u32::from(narrow), wide);
            assert_eq!(EncryptionAlgorithm::try_from(wide), Ok(algorithm));
            assert_eq!(EncryptionAlgorithm::try_from(narrow), Ok(algorithm));
            assert_eq!(Cipher::classify(wide).algorithm(), Some(algorithm));
            assert_eq!(algorithm.to_string(), Cipher::from(algorithm).to_string());
        }

        assert_eq!(EncryptionAlgorithm::try_from(4u32), Err(()));
        assert_eq!(EncryptionAlgorithm::try_from(32u8), Err(()));
        assert_eq!(Cipher::classify(5u8).algorithm(), None);
    }
}
