//! Mapping from `aliasdns_domain::RecordType` to `hickory_proto::rr::RecordType`.

use aliasdns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::TXT => HickoryRecordType::TXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_agree() {
        for rt in RecordType::ALL {
            assert_eq!(u16::from(RecordTypeMapper::to_hickory(rt)), rt.to_u16());
        }
    }
}
