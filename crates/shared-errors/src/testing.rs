//! Fixtures for crates that test against the taxonomy.

use crate::context::Price;
use crate::failure::Failure;

/// One failure of every kind, in registry order.
pub fn sample_failures() -> Vec<Failure> {
    vec![
        Failure::decode("peer-decode", &[0xde, 0xad, 0xbe, 0xef]),
        Failure::bucket_full(17),
        Failure::remote_exception("peer-remote", "store rejected"),
        Failure::TransportNotConnected,
        Failure::connection_closed("peer-closed"),
        Failure::invalid_header(1_024, "bad proof of work"),
        Failure::download_sd_timeout("sd0001"),
        Failure::download_timeout("deadbeef"),
        Failure::download_data_timeout("sd0002"),
        Failure::resolve_timeout("lbry://test"),
        Failure::misbehaving_peer("peer-bad", "unsolicited blob"),
        Failure::invalid_data("P2"),
        Failure::no_response("P1"),
        Failure::invalid_response("P3"),
        Failure::no_such_blob("blob0001"),
        Failure::no_such_stream_hash("stream0001"),
        Failure::no_such_sd_hash("sd0003"),
        Failure::invalid_blob_hash("not-a-hash"),
        Failure::duplicate_stream_hash("stream0002"),
        Failure::unknown_name("missing-name"),
        Failure::unknown_claim_id("claim0001"),
        Failure::unknown_uri("lbry://nonexistent"),
        Failure::unknown_outpoint("txid0001:3"),
        Failure::InvalidName {
            name: "bad#name@".into(),
            invalid_characters: vec!['#', '@'],
        },
        Failure::resolve("lbry://broken", "claim expired"),
        Failure::unknown_stream_type("holographic"),
        Failure::invalid_stream_descriptor("missing stream_name"),
        Failure::invalid_stream_info("some-claim", "{\"version\": 9}"),
        Failure::InsufficientFunds,
        Failure::NegativeFunds,
        Failure::NullFunds,
        Failure::invalid_currency("XYZ"),
        Failure::invalid_exchange_rate("bittrex", "empty ticker"),
        Failure::currency_conversion("USD", "DOGE"),
        Failure::key_fee_above_max(Price::new(500, "LBC"), Price::new(100, "LBC")),
        Failure::PriceDisagreement,
        Failure::negotiation("peer withdrew offer"),
        Failure::file_open("/tmp/stream.mp4", "permission denied"),
        Failure::no_such_directory("/srv/downloads"),
        Failure::InvalidAuthenticationToken,
        Failure::unknown_api_method("blob_frobnicate"),
        Failure::rpc("wallet is locked"),
        Failure::start_condition_not_met("wallet"),
        Failure::components_not_started(["dht", "blob_manager"]),
        Failure::download_cancelled("deadbeef"),
        Failure::RequestCancelled,
    ]
}
