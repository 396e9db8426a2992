mod v0_to_v1;
pub(crate) use v0_to_v1::V0ToV1Migration;
