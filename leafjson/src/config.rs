// SPDX-License-Identifier: Apache-2.0

/// Configuration trait for the scratch buffer used while decoding strings.
pub trait ScratchConfig {
    /// Capacity allocated the first time the scratch buffer has to grow.
    /// Later growth multiplies the capacity by 1.5.
    const INITIAL_CAPACITY: usize;
}

/// Default configuration: 256 bytes before the first 1.5x growth step.
pub struct DefaultConfig;

impl ScratchConfig for DefaultConfig {
    const INITIAL_CAPACITY: usize = 256;
}

/// Scratch configuration with a caller-chosen initial capacity.
///
/// Example use:
/// ```rust
/// use leafjson::{ScratchCapacity, SliceParser};
///
/// // Documents with long strings skip the first few growth steps
/// let parser = SliceParser::<ScratchCapacity<4096>>::with_config(r#""hello""#);
/// let value = parser.parse().unwrap();
/// assert_eq!(value.as_str(), Some("hello"));
/// ```
pub struct ScratchCapacity<const N: usize>;

impl<const N: usize> ScratchConfig for ScratchCapacity<N> {
    // A zero capacity could never grow by 1.5x
    const INITIAL_CAPACITY: usize = if N < 2 { 2 } else { N };
}
