// Intra prediction (§4.3): border construction with optional [1,2,1]
// smoothing, and the 35-mode predictor (planar, DC, and 33 angular modes
// including the two pure horizontal/vertical cases).

use crate::array2d::Array2D;
use crate::consts::{ABS_INV_ANGLE_TABLE, ANGLE_TABLE, WHETHER_FILTER_BORDER_FOR_Y_TABLE};
use crate::enums::{ChannelType, CTU_SZ, PMODE_DC, PMODE_DEG135, PMODE_HOR, PMODE_PLANAR, PMODE_VER};

const PIX_MIDDLE_VALUE: u8 = 128;

fn pix_clip(x: i32) -> u8 {
  x.clamp(0, 255) as u8
}

pub struct Border {
  pub ubla: u8,
  pub ublb: Vec<u8>,
  pub ubar: Vec<u8>,
  pub fbla: u8,
  pub fblb: Vec<u8>,
  pub fbar: Vec<u8>,
}

// `get` samples the reconstructed image at an offset relative to this
// block's top-left corner; row/col may be -1 to reach the border row
// or column above/left of the block.
pub fn get_border(
  sz: usize,
  bll_exist: bool,
  blb_exist: bool,
  baa_exist: bool,
  bar_exist: bool,
  get: impl Fn(i32, i32) -> u8,
) -> Border {
  let ubla = if bll_exist && baa_exist {
    get(-1, -1)
  } else if bll_exist {
    get(0, -1)
  } else if baa_exist {
    get(-1, 0)
  } else {
    PIX_MIDDLE_VALUE
  };

  let mut ublb = vec![0u8; sz * 2];
  for i in 0..sz {
    ublb[i] = if bll_exist { get(i as i32, -1) } else { ubla };
  }
  for i in sz..sz * 2 {
    ublb[i] = if blb_exist { get(i as i32, -1) } else { ublb[sz - 1] };
  }

  let mut ubar = vec![0u8; sz * 2];
  for i in 0..sz {
    ubar[i] = if baa_exist { get(-1, i as i32) } else { ubla };
  }
  for i in sz..sz * 2 {
    ubar[i] = if bar_exist { get(-1, i as i32) } else { ubar[sz - 1] };
  }

  let fbla = ((2 + ublb[0] as i32 + ubar[0] as i32 + 2 * ubla as i32) >> 2) as u8;

  let mut fblb = vec![0u8; sz * 2];
  let mut fbar = vec![0u8; sz * 2];
  fblb[0] = ((2 + 2 * ublb[0] as i32 + ublb[1] as i32 + ubla as i32) >> 2) as u8;
  fbar[0] = ((2 + 2 * ubar[0] as i32 + ubar[1] as i32 + ubla as i32) >> 2) as u8;
  for i in 1..sz * 2 - 1 {
    fblb[i] = ((2 + 2 * ublb[i] as i32 + ublb[i - 1] as i32 + ublb[i + 1] as i32) >> 2) as u8;
    fbar[i] = ((2 + 2 * ubar[i] as i32 + ubar[i - 1] as i32 + ubar[i + 1] as i32) >> 2) as u8;
  }
  fblb[sz * 2 - 1] = ublb[sz * 2 - 1];
  fbar[sz * 2 - 1] = ubar[sz * 2 - 1];

  Border { ubla, ublb, ubar, fbla, fblb, fbar }
}

pub fn predict(sz: usize, ch: ChannelType, pmode: u8, border: &Border) -> Array2D<u8> {
  let whether_filter_edge = ch == ChannelType::Y && sz <= 16;
  let whether_filter_border =
    ch == ChannelType::Y && WHETHER_FILTER_BORDER_FOR_Y_TABLE[sz / 8][pmode as usize] != 0;

  let bla = if whether_filter_border { border.fbla } else { border.ubla };
  let blb: &[u8] = if whether_filter_border { &border.fblb } else { &border.ublb };
  let bar: &[u8] = if whether_filter_border { &border.fbar } else { &border.ubar };

  let mut dst = Array2D::new_with(sz, sz, |_, _| 0u8);

  if pmode == PMODE_PLANAR {
    for i in 0..sz {
      for j in 0..sz {
        let hor_pred = (sz - j - 1) as i32 * blb[i] as i32 + (j + 1) as i32 * bar[sz] as i32;
        let ver_pred = (sz - i - 1) as i32 * bar[j] as i32 + (i + 1) as i32 * blb[sz] as i32;
        dst[i][j] = ((sz as i32 + hor_pred + ver_pred) / (sz as i32 * 2)) as u8;
      }
    }
  } else if pmode == PMODE_DC {
    let mut dc_pix = sz as i32;
    for i in 0..sz {
      dc_pix += blb[i] as i32 + bar[i] as i32;
    }
    dc_pix /= sz as i32 * 2;

    for i in 0..sz {
      for j in 0..sz {
        dst[i][j] = dc_pix as u8;
      }
    }

    if whether_filter_edge {
      dst[0][0] = ((2 + 2 * dc_pix + blb[0] as i32 + bar[0] as i32) >> 2) as u8;
      for i in 1..sz {
        dst[0][i] = ((2 + 3 * dc_pix + bar[i] as i32) >> 2) as u8;
        dst[i][0] = ((2 + 3 * dc_pix + blb[i] as i32) >> 2) as u8;
      }
    }
  } else if pmode == PMODE_HOR {
    for i in 0..sz {
      for j in 0..sz {
        dst[i][j] = blb[i];
      }
    }
    if whether_filter_edge {
      for j in 0..sz {
        let bias = (bar[j] as i32 - bla as i32) >> 1;
        dst[0][j] = pix_clip(bias + dst[0][j] as i32);
      }
    }
  } else if pmode == PMODE_VER {
    for i in 0..sz {
      for j in 0..sz {
        dst[i][j] = bar[j];
      }
    }
    if whether_filter_edge {
      for i in 0..sz {
        let bias = (blb[i] as i32 - bla as i32) >> 1;
        dst[i][0] = pix_clip(bias + dst[i][0] as i32);
      }
    }
  } else {
    let is_horizontal = pmode < PMODE_DEG135;
    let angle = ANGLE_TABLE[pmode as usize];
    let abs_inv_angle = ABS_INV_ANGLE_TABLE[pmode as usize];

    let bmain: &[u8] = if is_horizontal { blb } else { bar };
    let bside: &[u8] = if is_horizontal { bar } else { blb };

    // ref_buff is addressed with negative indices in the original; here
    // `base` is the offset that maps index 0 of the original onto this
    // Vec, leaving CTU_SZ*2 slots of headroom on either side.
    let base = CTU_SZ * 2;
    let mut ref_buff = vec![0u8; CTU_SZ * 4 + 1];
    ref_buff[base] = bla;
    for i in 0..sz * 2 {
      ref_buff[base + 1 + i] = bside[i];
    }

    let mut i = -1i32;
    while i > ((sz as i32 * angle) >> 5) {
      let j = (128 - abs_inv_angle * i) >> 8;
      ref_buff[(base as i32 + i) as usize] = ref_buff[(base as i32 + j) as usize];
      i -= 1;
    }

    for i in 0..sz * 2 {
      ref_buff[base + 1 + i] = bmain[i];
    }

    for i in 0..sz {
      let offset = angle * (i as i32 + 1);
      let offset_i = offset >> 5;
      let offset_f = offset & 0x1f;
      for j in 0..sz {
        let idx1 = (base as i32 + offset_i + j as i32 + 1) as usize;
        let pix1 = ref_buff[idx1] as i32;
        let pix2 = ref_buff[idx1 + 1] as i32;
        let pix = (((32 - offset_f) * pix1 + offset_f * pix2 + 16) >> 5) as u8;
        if is_horizontal {
          dst[j][i] = pix;
        } else {
          dst[i][j] = pix;
        }
      }
    }
  }

  dst
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dc_mode_on_flat_border_yields_flat_block() {
    let border = get_border(8, true, true, true, true, |_, _| 200u8);
    let pred = predict(8, ChannelType::Y, PMODE_DC, &border);
    for i in 0..8 {
      for j in 0..8 {
        assert!((pred[i][j] as i32 - 200).abs() <= 2);
      }
    }
  }

  #[test]
  fn pure_horizontal_copies_left_column() {
    let border = get_border(4, true, false, false, false, |y, _| (10 + y) as u8);
    let pred = predict(4, ChannelType::Y, PMODE_HOR, &border);
    for i in 0..4 {
      // The left border filter only perturbs the top row; other rows copy blb[i] exactly.
      if i > 0 {
        for j in 0..4 {
          assert_eq!(pred[i][j], border.ublb[i]);
        }
      }
    }
  }

  #[test]
  fn no_border_available_falls_back_to_middle_grey() {
    let border = get_border(8, false, false, false, false, |_, _| 0u8);
    assert_eq!(border.ubla, PIX_MIDDLE_VALUE);
    let pred = predict(8, ChannelType::Y, PMODE_DC, &border);
    assert_eq!(pred[4][4], PIX_MIDDLE_VALUE);
  }
}
