//! 消息编解码，线上格式为 JSON 对象

use alloc::vec::Vec;

use sundrive_common::*;

/// 解析来自伴侣应用的消息，未知字段忽略
pub fn decode_inbound(bytes: &[u8]) -> SystemResult<InboundMessage> {
    serde_json::from_slice(bytes).map_err(|_| SystemError::CodecError(CodecError::Decode))
}

pub fn encode_outbound(message: &OutboundMessage) -> SystemResult<Vec<u8>> {
    serde_json::to_vec(message).map_err(|_| SystemError::CodecError(CodecError::Encode))
}
