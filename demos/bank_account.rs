//! Bank account demo: one set of balances, five different roles.
//!
//! Run with: `cargo run --example bank_account`

use proxied_map::{Policy, ProxiedMap};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let balances = [("alice", 1_000), ("bob", 250), ("vault", 1_000_000)];

    let roles = [
        ("teller", Policy::FullAccess),
        ("inspector", Policy::Reader),
        ("sandbox", Policy::own_map(true).owning("alice", 10)),
        ("clerk", Policy::proxy().writable("bob").prohibited("vault")),
        ("printer", Policy::slave().allow("alice")),
    ];

    for (role, policy) in roles {
        let auditor = policy.into_auditor();
        let mut bank = ProxiedMap::new(balances, &auditor);

        tracing::info!(role, "--- session ---");
        for key in ["alice", "bob", "vault"] {
            match bank.read(key) {
                Ok(value) => tracing::info!(role, key, value, "read"),
                Err(err) => tracing::warn!(role, key, %err, "read failed"),
            }
        }

        let attempts = [
            ("edit alice", bank.edit("alice", 0)),
            ("edit bob", bank.edit("bob", 300)),
            ("add dave", bank.add("dave", 5)),
            ("remove bob", bank.remove("bob")),
        ];
        for (what, outcome) in attempts {
            match outcome {
                Ok(()) => tracing::info!(role, what, "allowed"),
                Err(err) => tracing::warn!(role, what, %err, "denied"),
            }
        }

        match bank.read("alice") {
            Ok(value) => tracing::info!(role, value, "alice after session"),
            Err(err) => tracing::warn!(role, %err, "alice after session"),
        }
    }
}
