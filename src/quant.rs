// Rate-distortion-optimised quantisation (§4.2). Each 4x4 coefficient
// group gets an independent trellis: every coefficient picks the level
// (among a small neighbourhood of the rounded value) that minimises a
// weighted sum of residual-distortion and estimated entropy-coding rate,
// then the whole CG is zeroed if its accumulated magnitude falls below
// a threshold.

use crate::array2d::Array2D;
use crate::consts::{
  DIST_SHIFT_TABLE, LEVEL_RATE_TABLE, LEVEL_SHIFT_TABLE, Q_SHIFT_TABLE, RDCOST_WEIGHT_BITS,
  RDCOST_WEIGHT_DIST,
};
use crate::enums::{COEF_MAX_VALUE, COEF_MIN_VALUE, CG_SZ, I32_MAX_VALUE};

fn coef_clip(x: i32) -> i32 {
  x.clamp(COEF_MIN_VALUE, COEF_MAX_VALUE)
}

pub fn estimate_coeff_rate(level: i32) -> i32 {
  if level < 6 {
    return LEVEL_RATE_TABLE[level as usize];
  }
  let mut level = level - 6;
  let mut i = 0;
  while (1 << i) <= level {
    level -= 1 << i;
    i += 1;
  }
  92000 + ((3 + i * 2 + 1) << 15)
}

pub fn calc_rd_cost(qpd6: i32, dist: i32, bits: i32) -> i32 {
  let weight1 = RDCOST_WEIGHT_DIST[qpd6 as usize];
  let weight2 = RDCOST_WEIGHT_BITS[qpd6 as usize];
  let cost1 = if I32_MAX_VALUE / weight1 <= dist { I32_MAX_VALUE } else { weight1 * dist };
  let cost2 = if I32_MAX_VALUE / weight2 <= bits { I32_MAX_VALUE } else { weight2 * bits };
  if I32_MAX_VALUE - cost1 <= cost2 { I32_MAX_VALUE } else { cost1 + cost2 }
}

pub fn quantize(qpd6: i32, sz: usize, src: &Array2D<i32>) -> Array2D<i32> {
  let dist_sft = DIST_SHIFT_TABLE[sz / 8];
  let sft = LEVEL_SHIFT_TABLE[sz / 8] + qpd6;
  let add = 1 << sft >> 1;
  let max_dlevel = I32_MAX_VALUE - add;
  let cg_dlevel_threshold = 9 << sft >> 2;

  let mut dst = Array2D::new_with(sz, sz, |_, _| 0i32);

  let mut yc = 0;
  while yc < sz {
    let mut xc = 0;
    while xc < sz {
      let mut cg_sum_dlevel = 0;

      for y in yc..yc + CG_SZ {
        for x in xc..xc + CG_SZ {
          let absval = src[y][x].abs();
          let dlevel = if absval > 0x1ffff { max_dlevel } else { ((absval & 0x1ffff) << 14).min(max_dlevel) };
          let mut level = coef_clip((dlevel + add) >> sft);
          let min_level = 0.max(level - 2);
          let mut best_cost = I32_MAX_VALUE;
          let mut best_level = level;

          while level >= min_level {
            let dist1 = (dlevel - (level << sft)).abs() >> dist_sft;
            let dist = if dist1 < 46340 { dist1 * dist1 } else { I32_MAX_VALUE } >> 7;
            let cost = calc_rd_cost(qpd6, dist, estimate_coeff_rate(level));

            if cost < best_cost {
              best_cost = cost;
              best_level = level;
            }
            level -= 1;
          }

          dst[y][x] = if src[y][x] < 0 { -best_level } else { best_level };
          cg_sum_dlevel += dlevel.min(cg_dlevel_threshold);
        }
      }

      if cg_sum_dlevel < cg_dlevel_threshold {
        for y in yc..yc + CG_SZ {
          for x in xc..xc + CG_SZ {
            dst[y][x] = 0;
          }
        }
      }

      xc += CG_SZ;
    }
    yc += CG_SZ;
  }

  dst
}

pub fn dequantize(qpd6: i32, sz: usize, src: &Array2D<i32>) -> Array2D<i32> {
  let q_sft = Q_SHIFT_TABLE[sz / 8] + qpd6;
  Array2D::new_with(sz, sz, |i, j| coef_clip(src[i][j] << q_sft))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_block_quantizes_to_zero() {
    let src = Array2D::new_with(8, 8, |_, _| 0i32);
    let q = quantize(2, 8, &src);
    for i in 0..8 {
      for j in 0..8 {
        assert_eq!(q[i][j], 0);
      }
    }
  }

  #[test]
  fn dc_only_block_survives_cg_threshold_at_low_qp() {
    let mut src = Array2D::new_with(4, 4, |_, _| 0i32);
    src[0][0] = 4000;
    let q = quantize(0, 4, &src);
    assert_ne!(q[0][0], 0);
  }

  #[test]
  fn estimate_coeff_rate_is_monotone_for_small_levels() {
    assert!(estimate_coeff_rate(1) < estimate_coeff_rate(2));
    assert!(estimate_coeff_rate(2) < estimate_coeff_rate(3));
  }

  #[test]
  fn dequantize_scales_by_shift_table() {
    let mut src = Array2D::new_with(8, 8, |_, _| 0i32);
    src[0][0] = 3;
    let d = dequantize(2, 8, &src);
    assert_eq!(d[0][0], 3 << (Q_SHIFT_TABLE[1] + 2));
  }
}
