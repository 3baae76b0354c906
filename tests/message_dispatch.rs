//! Message payload dispatch by command name

mod test_helpers;

use blvm_wire::config::DecodeLimits;
use blvm_wire::serialization::serialize_block;
use blvm_wire::{Command, NetworkMessage, PingMessage, PongMessage, VerackMessage, WireError};
use test_helpers::*;

#[test]
fn test_block_payload_matches_block_codec() {
    let block = create_block(vec![create_test_tx(1), create_test_tx(2)]);
    let message = NetworkMessage::from(block.clone());

    assert_eq!(message.command(), Command::Block);
    assert_eq!(message.encode_payload(), serialize_block(&block));
}

#[test]
fn test_genesis_block_dispatch() {
    let message = NetworkMessage::decode("block", &genesis_block_bytes()).unwrap();
    let NetworkMessage::Block(block) = message else {
        panic!("expected block message");
    };
    assert!(block.has_valid_merkle_root().unwrap());
}

#[test]
fn test_each_command_round_trips() {
    let messages = vec![
        NetworkMessage::from(create_block(vec![create_test_tx(9)])),
        NetworkMessage::from(VerackMessage),
        NetworkMessage::from(PingMessage { nonce: u64::MAX }),
        NetworkMessage::from(PongMessage { nonce: 0 }),
    ];

    for message in messages {
        let command = message.command();
        let payload = message.encode_payload();
        let decoded = NetworkMessage::decode(command.as_str(), &payload).unwrap();
        assert_eq!(decoded, message, "round-trip for {command}");
    }
}

#[test]
fn test_nonce_payload_sizes() {
    assert_eq!(NetworkMessage::from(PingMessage { nonce: 1 }).encode_payload().len(), 8);
    assert_eq!(
        NetworkMessage::from(PongMessage { nonce: 1 }).encode_payload(),
        vec![1, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_unknown_command() {
    assert!(matches!(
        NetworkMessage::decode("inv", &[]),
        Err(WireError::UnknownCommand(name)) if name == "inv"
    ));
}

#[test]
fn test_truncated_block_payload() {
    let payload = genesis_block_bytes();
    let err = NetworkMessage::decode_payload(Command::Block, &payload[..100]).unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn test_explicit_limits_apply_to_block_payload() {
    let payload = serialize_block(&create_block(vec![create_test_tx(1), create_test_tx(2)]));
    let limits = DecodeLimits {
        max_block_transactions: 1,
        ..DecodeLimits::default()
    };
    assert!(matches!(
        NetworkMessage::decode_payload_with_limits(Command::Block, &payload, &limits),
        Err(WireError::LimitExceeded { .. })
    ));
}

#[test]
fn test_trailing_bytes_ignored_for_fixed_size_messages() {
    let decoded = NetworkMessage::decode("pong", &[5, 0, 0, 0, 0, 0, 0, 0, 0xff]).unwrap();
    assert_eq!(decoded, NetworkMessage::Pong(PongMessage { nonce: 5 }));
}
