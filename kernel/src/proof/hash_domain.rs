//! Typed domain separators for canonical hashing.
//!
//! Every hash computed by the workspace selects a domain via [`HashDomain`].
//! The enum, its byte strings, and `ALL` come from one macro invocation so
//! they cannot drift apart.

macro_rules! hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix that is fed
        /// to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// Every domain, in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

hash_domains! {
    /// Canonical adjacency graph (kernel).
    Graph => b"WAYPOINT::GRAPH::V1\0",

    /// Search audit log (search).
    SearchAudit => b"WAYPOINT::SEARCH_AUDIT::V1\0",

    /// Per-artifact content hash inside a bundle (harness).
    BundleArtifact => b"WAYPOINT::BUNDLE_ARTIFACT::V1\0",

    /// Bundle digest over the artifact manifest (harness).
    BundleDigest => b"WAYPOINT::BUNDLE_DIGEST::V1\0",

    /// Benchmark input fingerprint.
    BenchInput => b"WAYPOINT::BENCH_INPUT::V1\0",
}
