use crate::{fmt::LogItem, log_vec, Cipher, EncryptionAlgorithm, EncryptionError, Loggable};

/// Payload encryption information of a `splice_info_section`.
///
/// The values are stored exactly as decoded. Whether a particular
/// algorithm is acceptable is up to the caller, see
/// [`EncryptedPacket::algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncryptedPacket {
    encryption_algorithm: u32,
    cw_index: u32,
}

impl EncryptedPacket {
    pub fn new(encryption_algorithm: u32, cw_index: u32) -> Self {
        Self {
            encryption_algorithm,
            cw_index,
        }
    }

    /// The cipher used for the payload. See SCTE 35 section 11.3.
    pub fn encryption_algorithm(&self) -> u32 {
        self.encryption_algorithm
    }

    /// The index of the control word (key) that decrypts the payload.
    pub fn cw_index(&self) -> u32 {
        self.cw_index
    }

    pub fn cipher(&self) -> Cipher {
        Cipher::classify(self.encryption_algorithm)
    }

    /// Resolve the cipher to one of the registered algorithms, rejecting
    /// reserved, user private and out of range values.
    pub fn algorithm(&self) -> Result<EncryptionAlgorithm, EncryptionError> {
        let cipher = self.cipher();

        let error = match cipher {
            Cipher::Algorithm(algorithm) => return Ok(algorithm),
            Cipher::Reserved(v) => EncryptionError::Reserved(v),
            Cipher::UserPrivate(v) => EncryptionError::UserPrivate(v),
            Cipher::Invalid(v) => EncryptionError::Invalid(v),
        };

        log::debug!(
            "Rejecting cipher 0x{:02X} ({cipher}) for CW index {}",
            self.encryption_algorithm,
            self.cw_index
        );

        Err(error)
    }
}

impl From<(EncryptionAlgorithm, u32)> for EncryptedPacket {
    fn from((algorithm, cw_index): (EncryptionAlgorithm, u32)) -> Self {
        Self::new(algorithm.into(), cw_index)
    }
}

impl Loggable for EncryptedPacket {
    fn as_log(&self) -> Vec<LogItem> {
        let algorithm = self.encryption_algorithm;
        let cipher = self.cipher();

        log_vec![
            (0, "Encrypted packet"),
            (1, "Cipher", format!("{cipher} (0x{algorithm:02X})")),
            (1, "CW index", format!("0x{:02X}", self.cw_index))
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Logger;

    #[test]
    fn fields_read_back_unchanged() {
        for (algorithm, cw_index) in [(0, 0), (3, 255), (63, 7), (64, 1), (u32::MAX, u32::MAX)] {
            let packet = EncryptedPacket::new(algorithm, cw_index);

            assert_eq!(packet.encryption_algorithm(), algorithm);
            assert_eq!(packet.cw_index(), cw_index);
        }
    }

    #[test]
    fn from_algorithm() {
        let packet = EncryptedPacket::from((EncryptionAlgorithm::TripleDes, 9));

        assert_eq!(packet, EncryptedPacket::new(EncryptionAlgorithm::TRIPLE_DES, 9));
        assert_eq!(packet.algorithm(), Ok(EncryptionAlgorithm::TripleDes));
    }

    #[test]
    fn strict_algorithm() {
        assert_eq!(
            EncryptedPacket::new(1, 0).algorithm(),
            Ok(EncryptionAlgorithm::DesEcb)
        );
        assert_eq!(
            EncryptedPacket::new(31, 0).algorithm(),
            Err(EncryptionError::Reserved(31))
        );
        assert_eq!(
            EncryptedPacket::new(32, 0).algorithm(),
            Err(EncryptionError::UserPrivate(32))
        );

        let err = EncryptedPacket::new(300, 0).algorithm().unwrap_err();
        assert_eq!(err, EncryptionError::Invalid(300));
        assert_eq!(err.value(), 300);
        assert_eq!(EncryptionError::try_from(Cipher::Invalid(300)), Ok(err));
    }

    #[test]
    fn log_dump() {
        let packet = EncryptedPacket::new(2, 0x10);

        assert_eq!(
            Logger::render(&packet.as_log()),
            vec![
                "Encrypted packet".to_string(),
                "  Cipher:   DES – CBC mode (0x02)".to_string(),
                "  CW index: 0x10".to_string(),
            ]
        );
    }
}
