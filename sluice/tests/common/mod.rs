use sluice::SignalConsumer;
use sluice::testing::TestFailure;

/// Per-producer signal counts used by the conservation test; they sum to
/// 173_500.
pub const PRODUCER_COUNTS: [u64; 8] = [
    12_000, 5_000, 75_000, 13_500, 22_000, 15_000, 7_500, 23_500,
];

/// Emits `count` next-values into `gateway`, each tagged with the producer id
/// and a per-producer sequence number so tests can check per-producer order.
pub fn emit_values<C>(gateway: &C, producer: u64, count: u64)
where
    C: SignalConsumer<(u64, u64), TestFailure>,
{
    for seq in 0..count {
        gateway.on_next((producer, seq));
    }
}
