//! Group-parameter planner: derives (group size, parity per group, number
//! of groups) from a data-block count `K` and a requested FEC ratio.

use crate::constants::{RS_MAX, RS_MAX_PARITY};
use crate::error::FecError;

/// A requested parity-to-data ratio, `num/den`, with `0 < num <= den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FecRatio {
    pub num: u32,
    pub den: u32,
}

impl FecRatio {
    pub fn new(num: u32, den: u32) -> Result<Self, FecError> {
        if num == 0 || den == 0 || num > den {
            return Err(FecError::InvalidRatio { num, den });
        }
        Ok(FecRatio { num, den })
    }
}

impl Default for FecRatio {
    /// 25/100, the default used throughout the spec's worked scenarios.
    fn default() -> Self {
        FecRatio { num: 25, den: 100 }
    }
}

/// The derived RS group parameters for a file with `K` data blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPlan {
    /// Data blocks per RS group (GS).
    pub group_size: u32,
    /// Parity blocks per RS group (M).
    pub parity_per_group: u32,
    /// Number of RS groups (G).
    pub num_groups: u32,
}

impl GroupPlan {
    /// Computes (GS, M, G) for `k` data blocks (`k >= 1`) and `ratio`.
    pub fn compute(k: u32, ratio: FecRatio) -> Result<GroupPlan, FecError> {
        let k = k.max(1);

        let m_desired = ((k as u64 * ratio.num as u64) + ratio.den as u64 - 1)
            / ratio.den as u64;
        let m_desired = m_desired.max(1) as u32;

        if k + m_desired <= RS_MAX {
            return Ok(GroupPlan {
                group_size: k,
                parity_per_group: m_desired,
                num_groups: 1,
            });
        }

        let bias = (ratio.num as u64 + ratio.den as u64) / 2;
        let m = (ratio.num as u64 * RS_MAX as u64 + bias) / (ratio.num as u64 + ratio.den as u64);
        let m = (m as u32).clamp(1, RS_MAX_PARITY as u32);

        let group_size = RS_MAX - m;
        if group_size == 0 {
            return Err(FecError::GroupPlanOverflow {
                k,
                num: ratio.num,
                den: ratio.den,
            });
        }
        let num_groups = (k + group_size - 1) / group_size;

        Ok(GroupPlan {
            group_size,
            parity_per_group: m,
            num_groups,
        })
    }

    /// Total packet count `N = K + G*M` for a file with `k` data blocks.
    pub fn total_packets(&self, k: u32) -> u32 {
        k + self.num_groups * self.parity_per_group
    }

    /// Block ids `{i : 0 <= i < k, i mod G == g}` belonging to group `g`,
    /// in ascending order.
    pub fn members_of_group(&self, k: u32, g: u32) -> Vec<u32> {
        (g..k).step_by(self.num_groups as usize).collect()
    }
}
