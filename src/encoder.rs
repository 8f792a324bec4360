// Top-level image encoder and the recursive CTU/CU rate-distortion search
// (§4.6/4.7). This is the encoder's core control flow: a recursive
// quad-tree partition search very much in the shape of a tile encoder
// walking superblocks, generalised here from AV1's partition/transform
// tree to HEVC's CU/PU/TU structure and its four-trial mode decision.
//
// The trial structure, the CABAC/context backup-by-copy at every node, and
// a couple of its quirks (the Trial-C/Trial-D reconstruction buffer being
// shared and mutated in place rather than scratch-copied, the `pmode` line
// buffer never scrolling across CTU rows) are reproduced deliberately:
// they affect the exact bitstream produced and are not "fixed" here.

use crate::array2d::Array2D;
use crate::cabac::CabacWriter;
use crate::context::{new_context_set, ContextSet};
use crate::enums::{
  ChannelType, CTU_SZ, I32_MAX_VALUE, MAX_XSZ, MAX_YSZ, MIN_CU_SZ, MIN_TU_SZ, PMODE_COUNT, PMODE_DC,
};
use crate::hls::generate_picture_header;
use crate::intra::{get_border, predict, Border};
use crate::quant::{calc_rd_cost, dequantize, quantize};
use crate::residual::{
  put_coef, put_part_size, put_qt_cbf, put_split_cu_flag, put_split_tu_flag, put_uv_pmode, put_y_pmode,
};
use crate::txfm::transform;

const N_TU_IN_CTU: usize = CTU_SZ / MIN_TU_SZ;

fn pad_up(sz: usize, max: usize) -> usize {
  let clipped = sz.min(max);
  (clipped + CTU_SZ - 1) / CTU_SZ * CTU_SZ
}

// Clamp (y, x) to `arr`'s valid range before reading; used to sample
// reference pixels across CTU boundaries at the image's edges, mirroring
// the source's `GET2D` clip-then-index macro.
fn get_clipped(arr: &Array2D<u8>, y: i32, x: i32) -> u8 {
  let y = y.clamp(0, arr.rows() as i32 - 1) as usize;
  let x = x.clamp(0, arr.cols() as i32 - 1) as usize;
  arr[y][x]
}

// Reconstruction scratch for a single CTU. Logical row/col -1 reach the
// border sampled from already-coded neighbours; columns extend out to
// 2*CTU_SZ-1 to hold the angular predictor's above-right/below-left reach.
// This buffer is shared and mutated in place across the whole recursive
// search of the CTU, exactly like the source's `blk_rcon` pointer: earlier
// trials' writes are visible to (and overwritten by) later ones.
struct CtuRecon {
  buf: Array2D<u8>,
}

impl CtuRecon {
  fn new() -> Self {
    Self { buf: Array2D::new_with(CTU_SZ + 1, 1 + CTU_SZ * 2, |_, _| 128u8) }
  }

  fn get(&self, row: i32, col: i32) -> u8 {
    self.buf[(row + 1) as usize][(col + 1) as usize]
  }

  fn set(&mut self, row: i32, col: i32, v: u8) {
    self.buf[(row + 1) as usize][(col + 1) as usize] = v;
  }

  fn snapshot(&self, row0: i32, col0: i32, sz: usize) -> Array2D<u8> {
    Array2D::new_with(sz, sz, |i, j| self.get(row0 + i as i32, col0 + j as i32))
  }

  fn restore(&mut self, row0: i32, col0: i32, sz: usize, snap: &Array2D<u8>) {
    for i in 0..sz {
      for j in 0..sz {
        self.set(row0 + i as i32, col0 + j as i32, snap[i][j]);
      }
    }
  }
}

// Per-image context line buffers (§4.7/§9). `cu_sz` is scrolled to the next
// CTU row at the end of each row; `pmode` intentionally is not, so above
// context at a CTU-row boundary is whatever the first CTU row happened to
// leave behind. Reproduced as-is: changing it would change the bitstream.
struct LineBuffers {
  cu_sz: Array2D<u8>,
  pmode: Array2D<u8>,
}

impl LineBuffers {
  fn new(tu_cols: usize) -> Self {
    Self {
      cu_sz: Array2D::new_with(1 + N_TU_IN_CTU, 1 + tu_cols, |_, _| CTU_SZ as u8),
      pmode: Array2D::new_with(1 + N_TU_IN_CTU, 1 + tu_cols, |_, _| PMODE_DC),
    }
  }

  fn cu_sz(&self, tu_row: i32, tu_col: i32) -> u8 {
    self.cu_sz[(tu_row + 1) as usize][(tu_col + 1) as usize]
  }

  fn pmode(&self, tu_row: i32, tu_col: i32) -> u8 {
    self.pmode[(tu_row + 1) as usize][(tu_col + 1) as usize]
  }

  fn set_cu_sz(&mut self, tu_row0: i32, tu_col0: i32, n: usize, val: u8) {
    for r in 0..n {
      for c in 0..n {
        self.cu_sz[(tu_row0 + 1 + r as i32) as usize][(tu_col0 + 1 + c as i32) as usize] = val;
      }
    }
  }

  fn set_pmode(&mut self, tu_row0: i32, tu_col0: i32, n: usize, val: u8) {
    for r in 0..n {
      for c in 0..n {
        self.pmode[(tu_row0 + 1 + r as i32) as usize][(tu_col0 + 1 + c as i32) as usize] = val;
      }
    }
  }

  fn scroll_rows(&mut self) {
    let cols = self.cu_sz.cols();
    for j in 0..cols {
      self.cu_sz[0][j] = self.cu_sz[N_TU_IN_CTU][j];
    }
  }
}

fn blk_not_all_zero(blk: &Array2D<i32>, sz: usize) -> bool {
  for i in 0..sz {
    for j in 0..sz {
      if blk[i][j] != 0 {
        return true;
      }
    }
  }
  false
}

// SSE against a local (not-yet-committed) reconstruction block.
fn sse_block(orig: &Array2D<u8>, row0: i32, col0: i32, rec: &Array2D<u8>, sz: usize) -> i32 {
  let mut sum = 0i32;
  for i in 0..sz {
    for j in 0..sz {
      let diff = orig[row0 as usize + i][col0 as usize + j] as i32 - rec[i][j] as i32;
      sum += diff * diff;
    }
  }
  sum
}

// SSE against the shared CTU reconstruction buffer.
fn blk_sse(orig: &Array2D<u8>, row0: i32, col0: i32, rcon: &CtuRecon, sz: usize) -> i32 {
  let mut sum = 0i32;
  for i in 0..sz {
    for j in 0..sz {
      let diff = orig[row0 as usize + i][col0 as usize + j] as i32 - rcon.get(row0 + i as i32, col0 + j as i32) as i32;
      sum += diff * diff;
    }
  }
  sum
}

// predict -> residual -> forward transform -> quantise -> dequantise ->
// inverse transform -> clip-add, for one TU. Does not touch any shared
// reconstruction buffer; the caller decides whether/when to commit `rec`.
fn run_tu(
  qpd6: i32,
  orig: &Array2D<u8>,
  row0: i32,
  col0: i32,
  sz: usize,
  pmode: u8,
  border: &Border,
) -> (Array2D<i32>, Array2D<u8>) {
  let pred = predict(sz, ChannelType::Y, pmode, border);
  let resid =
    Array2D::new_with(sz, sz, |i, j| orig[row0 as usize + i][col0 as usize + j] as i32 - pred[i][j] as i32);
  let coefs = transform(sz, false, &resid);
  let quat = quantize(qpd6, sz, &coefs);
  let deq = dequantize(qpd6, sz, &quat);
  let inv = transform(sz, true, &deq);
  let rec = Array2D::new_with(sz, sz, |i, j| (inv[i][j] + pred[i][j] as i32).clamp(0, 255) as u8);
  (quat, rec)
}

// Runs one TU against the live border in `rcon` and writes its
// reconstruction straight back into `rcon`, matching the source's
// sub_blk_rcon aliasing: later quadrants of the same trial observe it.
#[allow(clippy::too_many_arguments)]
fn encode_tu_to_rcon(
  qpd6: i32,
  orig: &Array2D<u8>,
  row0: i32,
  col0: i32,
  sz: usize,
  pmode: u8,
  rcon: &mut CtuRecon,
  bll_exist: bool,
  blb_exist: bool,
  baa_exist: bool,
  bar_exist: bool,
) -> Array2D<i32> {
  let border = get_border(sz, bll_exist, blb_exist, baa_exist, bar_exist, |dy, dx| rcon.get(row0 + dy, col0 + dx));
  let (quat, rec) = run_tu(qpd6, orig, row0, col0, sz, pmode, &border);
  for i in 0..sz {
    for j in 0..sz {
      rcon.set(row0 + i as i32, col0 + j as i32, rec[i][j]);
    }
  }
  quat
}

fn put_cu_2nx2n_single_tu(
  cabac: &mut CabacWriter,
  ctxs: &mut ContextSet,
  sz: usize,
  pmode: u8,
  pmode_left: i32,
  pmode_above: i32,
  quat: &Array2D<i32>,
) {
  let y_cbf = blk_not_all_zero(quat, sz);
  put_part_size(cabac, ctxs, sz, false);
  put_y_pmode(cabac, ctxs, false, &[pmode as i32], &[pmode_left], &[pmode_above]);
  put_uv_pmode(cabac, ctxs);
  put_split_tu_flag(cabac, ctxs, sz, false);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::U, false);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::V, false);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::Y, y_cbf);
  if y_cbf {
    put_coef(cabac, ctxs, sz, ChannelType::Y, pmode as i32, quat);
  }
}

fn put_cu_2nx2n_tu_split(
  cabac: &mut CabacWriter,
  ctxs: &mut ContextSet,
  sz: usize,
  pmode: u8,
  pmode_left: i32,
  pmode_above: i32,
  sub_quat: &[Array2D<i32>; 4],
) {
  let half = sz / 2;
  put_part_size(cabac, ctxs, sz, false);
  put_y_pmode(cabac, ctxs, false, &[pmode as i32], &[pmode_left], &[pmode_above]);
  put_uv_pmode(cabac, ctxs);
  put_split_tu_flag(cabac, ctxs, sz, true);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::U, false);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::V, false);
  for sub_quat_isub in sub_quat {
    let y_cbf = blk_not_all_zero(sub_quat_isub, half);
    put_qt_cbf(cabac, ctxs, 1, ChannelType::Y, y_cbf);
    if y_cbf {
      put_coef(cabac, ctxs, half, ChannelType::Y, pmode as i32, sub_quat_isub);
    }
  }
}

#[allow(clippy::too_many_arguments)]
fn put_cu_part_nxn(
  cabac: &mut CabacWriter,
  ctxs: &mut ContextSet,
  sz: usize,
  pmodes: &[i32; 4],
  pmodes_left: &[i32; 4],
  pmodes_above: &[i32; 4],
  sub_quat: &[Array2D<i32>; 4],
) {
  let half = sz / 2;
  put_part_size(cabac, ctxs, sz, true);
  put_y_pmode(cabac, ctxs, true, pmodes, pmodes_left, pmodes_above);
  put_uv_pmode(cabac, ctxs);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::U, false);
  put_qt_cbf(cabac, ctxs, 0, ChannelType::V, false);
  for isub in 0..4 {
    let y_cbf = blk_not_all_zero(&sub_quat[isub], half);
    put_qt_cbf(cabac, ctxs, 1, ChannelType::Y, y_cbf);
    if y_cbf {
      put_coef(cabac, ctxs, half, ChannelType::Y, pmodes[isub], &sub_quat[isub]);
    }
  }
}

// Per-CTU search context: the original pixels (read-only) and the image's
// line buffers (mutated by whichever trial wins at each CU).
struct CuState<'a> {
  qpd6: i32,
  orig: &'a Array2D<u8>,
  lines: &'a mut LineBuffers,
}

// Recursive CU search (§4.6). `(row0, col0)` is this CU's pixel origin
// within the CTU; `(tu_row0, tu_col0)` is its origin in the line buffers
// (tu_row0 relative to the CTU row, tu_col0 absolute across the image).
#[allow(clippy::too_many_arguments)]
fn process_cu(
  st: &mut CuState,
  cabac: &mut CabacWriter,
  ctxs: &mut ContextSet,
  rcon: &mut CtuRecon,
  row0: i32,
  col0: i32,
  tu_row0: i32,
  tu_col0: i32,
  sz: usize,
  bll_exist: bool,
  blb_exist: bool,
  baa_exist: bool,
  bar_exist: bool,
) {
  let o_cabac = cabac.clone();
  let o_ctxs = *ctxs;
  let o_bits = o_cabac.len_bits();

  let n_tu = sz / MIN_TU_SZ;
  let half = sz / 2;

  let larger_than_left_cu = sz as u8 > st.lines.cu_sz(tu_row0, tu_col0 - 1);
  let larger_than_above_cu = sz as u8 > st.lines.cu_sz(tu_row0 - 1, tu_col0);
  let pmode_left = st.lines.pmode(tu_row0, tu_col0 - 1) as i32;
  let pmode_above = st.lines.pmode(tu_row0 - 1, tu_col0) as i32;

  // Sub-block geometry and border-existence, Z-order: TL, TR, BL, BR.
  let half_tu = (n_tu / 2) as i32;
  let sub_row0 = [row0, row0, row0 + half as i32, row0 + half as i32];
  let sub_col0 = [col0, col0 + half as i32, col0, col0 + half as i32];
  let sub_tu_row0 = [tu_row0, tu_row0, tu_row0 + half_tu, tu_row0 + half_tu];
  let sub_tu_col0 = [tu_col0, tu_col0 + half_tu, tu_col0, tu_col0 + half_tu];
  let sub_bll = [bll_exist, true, bll_exist, true];
  let sub_blb = [bll_exist, false, blb_exist, false];
  let sub_baa = [baa_exist, baa_exist, true, true];
  let sub_bar = [baa_exist, bar_exist, true, false];

  let mut rdcost_best = I32_MAX_VALUE;
  let mut best_rcon: Option<Array2D<u8>> = None;

  // Trial A: split into four sub-CUs (only when not already at the floor).
  if sz > MIN_CU_SZ {
    put_split_cu_flag(cabac, ctxs, sz, true, larger_than_left_cu, larger_than_above_cu);
    for isub in 0..4 {
      process_cu(
        st,
        cabac,
        ctxs,
        rcon,
        sub_row0[isub],
        sub_col0[isub],
        sub_tu_row0[isub],
        sub_tu_col0[isub],
        half,
        sub_bll[isub],
        sub_blb[isub],
        sub_baa[isub],
        sub_bar[isub],
      );
    }
    let distortion = blk_sse(st.orig, row0, col0, rcon, sz);
    rdcost_best = calc_rd_cost(st.qpd6, distortion, cabac.len_bits() - o_bits);
    best_rcon = Some(rcon.snapshot(row0, col0, sz));
  }

  // Trial B: PART_2Nx2N, a single TU spanning the whole CU, all pmodes.
  {
    let border =
      get_border(sz, bll_exist, blb_exist, baa_exist, bar_exist, |dy, dx| rcon.get(row0 + dy, col0 + dx));
    for pmode in 0..PMODE_COUNT as u8 {
      let mut t_cabac = o_cabac.clone();
      let mut t_ctxs = o_ctxs;

      let (quat, rec) = run_tu(st.qpd6, st.orig, row0, col0, sz, pmode, &border);

      put_split_cu_flag(&mut t_cabac, &mut t_ctxs, sz, false, larger_than_left_cu, larger_than_above_cu);
      put_cu_2nx2n_single_tu(&mut t_cabac, &mut t_ctxs, sz, pmode, pmode_left, pmode_above, &quat);

      let distortion = sse_block(st.orig, row0, col0, &rec, sz);
      let rdcost = calc_rd_cost(st.qpd6, distortion, t_cabac.len_bits() - o_bits);

      if rdcost_best >= rdcost {
        rdcost_best = rdcost;
        *cabac = t_cabac;
        *ctxs = t_ctxs;
        best_rcon = Some(rec);
        st.lines.set_cu_sz(tu_row0, tu_col0, n_tu, sz as u8);
        st.lines.set_pmode(tu_row0, tu_col0, n_tu, pmode);
      }
    }
  }

  // Trial C: PART_2Nx2N, TU split into 4 quarters, all pmodes. Each
  // quarter is predicted and reconstructed directly into `rcon`, so later
  // quarters of the same trial see earlier ones; the SSE below reads
  // `rcon` itself rather than a separately stored reconstruction.
  for pmode in 0..PMODE_COUNT as u8 {
    let mut t_cabac = o_cabac.clone();
    let mut t_ctxs = o_ctxs;
    let mut sub_quat = [
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
    ];

    for isub in 0..4 {
      sub_quat[isub] = encode_tu_to_rcon(
        st.qpd6,
        st.orig,
        sub_row0[isub],
        sub_col0[isub],
        half,
        pmode,
        rcon,
        sub_bll[isub],
        sub_blb[isub],
        sub_baa[isub],
        sub_bar[isub],
      );
    }

    put_split_cu_flag(&mut t_cabac, &mut t_ctxs, sz, false, larger_than_left_cu, larger_than_above_cu);
    put_cu_2nx2n_tu_split(&mut t_cabac, &mut t_ctxs, sz, pmode, pmode_left, pmode_above, &sub_quat);

    let distortion = blk_sse(st.orig, row0, col0, rcon, sz);
    let rdcost = calc_rd_cost(st.qpd6, distortion, t_cabac.len_bits() - o_bits);

    if rdcost_best >= rdcost {
      rdcost_best = rdcost;
      *cabac = t_cabac;
      *ctxs = t_ctxs;
      best_rcon = Some(rcon.snapshot(row0, col0, sz));
      st.lines.set_cu_sz(tu_row0, tu_col0, n_tu, sz as u8);
      st.lines.set_pmode(tu_row0, tu_col0, n_tu, pmode);
    }
  }

  // Trial D: only at the CU floor, PART_NxN, four independent 4x4 PUs.
  // Each quadrant picks its own best pmode using a scratch CABAC/context
  // (coefficient-coding rate only, no partition header), committing its
  // winning reconstruction into `rcon` before the next quadrant searches
  // (so its border sees the real decision, not a placeholder).
  if sz == MIN_CU_SZ {
    let mut t_cabac = o_cabac.clone();
    let mut t_ctxs = o_ctxs;
    let mut sub_pmodes = [0i32; 4];
    let mut sub_quat = [
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
      Array2D::new_with(half, half, |_, _| 0i32),
    ];

    for isub in 0..4 {
      let border = get_border(half, sub_bll[isub], sub_blb[isub], sub_baa[isub], sub_bar[isub], |dy, dx| {
        rcon.get(sub_row0[isub] + dy, sub_col0[isub] + dx)
      });

      let mut rdcost_sub_best = I32_MAX_VALUE;
      let mut best_pmode = 0u8;
      let mut best_quat = Array2D::new_with(half, half, |_, _| 0i32);
      let mut best_rec = Array2D::new_with(half, half, |_, _| 0u8);

      for pmode in 0..PMODE_COUNT as u8 {
        let mut n_cabac = CabacWriter::new();
        let mut n_ctxs = new_context_set(st.qpd6);

        let (quat, rec) = run_tu(st.qpd6, st.orig, sub_row0[isub], sub_col0[isub], half, pmode, &border);
        put_coef(&mut n_cabac, &mut n_ctxs, half, ChannelType::Y, pmode as i32, &quat);

        let distortion = sse_block(st.orig, sub_row0[isub], sub_col0[isub], &rec, half);
        let rdcost = calc_rd_cost(st.qpd6, distortion, n_cabac.len_bits());

        if rdcost_sub_best >= rdcost {
          rdcost_sub_best = rdcost;
          best_pmode = pmode;
          best_quat = quat;
          best_rec = rec;
        }
      }

      sub_pmodes[isub] = best_pmode as i32;
      sub_quat[isub] = best_quat;
      for i in 0..half {
        for j in 0..half {
          rcon.set(sub_row0[isub] + i as i32, sub_col0[isub] + j as i32, best_rec[i][j]);
        }
      }
    }

    let sub_pmodes_left = [
      pmode_left,
      sub_pmodes[0],
      st.lines.pmode(sub_tu_row0[2], tu_col0 - 1) as i32,
      sub_pmodes[2],
    ];
    let sub_pmodes_above = [
      pmode_above,
      st.lines.pmode(tu_row0 - 1, sub_tu_col0[1]) as i32,
      sub_pmodes[0],
      sub_pmodes[1],
    ];

    put_split_cu_flag(&mut t_cabac, &mut t_ctxs, sz, false, larger_than_left_cu, larger_than_above_cu);
    put_cu_part_nxn(&mut t_cabac, &mut t_ctxs, sz, &sub_pmodes, &sub_pmodes_left, &sub_pmodes_above, &sub_quat);

    let distortion = blk_sse(st.orig, row0, col0, rcon, sz);
    let rdcost = calc_rd_cost(st.qpd6, distortion, t_cabac.len_bits() - o_bits);

    if rdcost_best >= rdcost {
      *cabac = t_cabac;
      *ctxs = t_ctxs;
      st.lines.set_cu_sz(tu_row0, tu_col0, n_tu, sz as u8);
      for isub in 0..4 {
        st.lines.set_pmode(sub_tu_row0[isub], sub_tu_col0[isub], n_tu / 2, sub_pmodes[isub] as u8);
      }
      return;
    }
  }

  if let Some(snap) = best_rcon {
    rcon.restore(row0, col0, sz, &snap);
  }
}

// Encodes a single 8-bit monochrome image as a standalone HEVC intra-only
// bitstream (§4.7, §6). `img_in` holds the `(*ysz, *xsz)` source pixels;
// `img_rcon_out` must already be allocated at the padded size this call
// will compute (`ysz`/`xsz` rounded up to a multiple of 32, capped at
// 8192) and is filled with the encoder's own reconstruction. `ysz`/`xsz`
// are updated in place to that padded size. `qpd6` must be in 0..=4.
// Returns the number of bytes written to the front of `out_buf`; sizing
// `out_buf` large enough is the caller's responsibility.
pub fn encode_image(
  out_buf: &mut [u8],
  img_in: &Array2D<u8>,
  img_rcon_out: &mut Array2D<u8>,
  ysz: &mut usize,
  xsz: &mut usize,
  qpd6: u8,
) -> usize {
  debug_assert!(qpd6 < 5);
  debug_assert_eq!(img_in.rows(), *ysz);
  debug_assert_eq!(img_in.cols(), *xsz);

  let qpd6 = qpd6 as i32;
  let yszn = pad_up(*ysz, MAX_YSZ);
  let xszn = pad_up(*xsz, MAX_XSZ);
  debug_assert_eq!(img_rcon_out.rows(), yszn);
  debug_assert_eq!(img_rcon_out.cols(), xszn);

  let mut out = generate_picture_header(qpd6 as usize, yszn, xszn);

  let mut cabac = CabacWriter::new();
  let mut ctxs = new_context_set(qpd6);

  let tu_cols = xszn / MIN_TU_SZ;
  let mut lines = LineBuffers::new(tu_cols);

  let n_ctu_y = yszn / CTU_SZ;
  let n_ctu_x = xszn / CTU_SZ;

  for ctu_y in 0..n_ctu_y {
    for ctu_x in 0..n_ctu_x {
      let y = ctu_y * CTU_SZ;
      let x = ctu_x * CTU_SZ;

      let bll_exist = x > 0;
      let blb_exist = false;
      let baa_exist = y > 0;
      let bar_exist = baa_exist && (x + CTU_SZ < xszn);

      let mut rcon = CtuRecon::new();
      for i in 0..CTU_SZ {
        rcon.set(i as i32, -1, get_clipped(img_rcon_out, y as i32 + i as i32, x as i32 - 1));
      }
      for j in -1..(CTU_SZ as i32 * 2) {
        rcon.set(-1, j, get_clipped(img_rcon_out, y as i32 - 1, x as i32 + j));
      }

      let orig = Array2D::new_with(CTU_SZ, CTU_SZ, |i, j| {
        get_clipped(img_in, y as i32 + i as i32, x as i32 + j as i32)
      });

      let tu_col0 = (x / MIN_TU_SZ) as i32;
      let mut st = CuState { qpd6, orig: &orig, lines: &mut lines };

      process_cu(&mut st, &mut cabac, &mut ctxs, &mut rcon, 0, 0, 0, tu_col0, CTU_SZ, bll_exist, blb_exist, baa_exist, bar_exist);

      for i in 0..CTU_SZ {
        for j in 0..CTU_SZ {
          img_rcon_out[y + i][x + j] = rcon.get(i as i32, j as i32);
        }
      }

      let is_last_ctu = ctu_y + 1 == n_ctu_y && ctu_x + 1 == n_ctu_x;
      cabac.put_terminate(is_last_ctu);
      cabac.submit_to(&mut out);
    }

    lines.scroll_rows();
  }

  cabac.finish();
  cabac.submit_to(&mut out);

  *ysz = yszn;
  *xsz = xszn;

  debug_assert!(out.len() <= out_buf.len());
  out_buf[..out.len()].copy_from_slice(&out);
  out.len()
}

#[cfg(test)]
mod tests {
  use super::*;

  // Runs the encoder on a `height x width` image with its own freshly
  // allocated output buffers, returning (bytes_written, bitstream,
  // reconstruction, padded_height, padded_width).
  fn run(height: usize, width: usize, pixels: &[u8], qpd6: u8) -> (usize, Vec<u8>, Array2D<u8>, usize, usize) {
    let img_in = Array2D::new_with(height, width, |i, j| pixels[i * width + j]);
    let mut ysz = height;
    let mut xsz = width;
    let yszn = pad_up(height, MAX_YSZ);
    let xszn = pad_up(width, MAX_XSZ);
    let mut img_rcon_out = Array2D::new_with(yszn, xszn, |_, _| 0u8);
    let mut out_buf = vec![0u8; 2 * (xszn + 32) * (yszn + 32) + 65536];

    let n = encode_image(&mut out_buf, &img_in, &mut img_rcon_out, &mut ysz, &mut xsz, qpd6);
    (n, out_buf[..n].to_vec(), img_rcon_out, ysz, xsz)
  }

  #[test]
  fn uniform_gray_encodes_small_and_reconstructs_exactly() {
    let (n, bitstream, recon, ysz, xsz) = run(32, 32, &[128u8; 32 * 32], 2);
    assert_eq!(n, bitstream.len());
    assert!(bitstream.len() < 300); // headers plus one near-empty CTU, well under the raw 1024 bytes
    assert_eq!((ysz, xsz), (32, 32));
    for y in 0..32 {
      for x in 0..32 {
        assert_eq!(recon[y][x], 128);
      }
    }
  }

  #[test]
  fn impulse_produces_a_nonempty_bitstream_and_clips_correctly() {
    let mut pixels = vec![0u8; 32 * 32];
    pixels[0] = 255;
    let (_n, bitstream, recon, _, _) = run(32, 32, &pixels, 0);
    assert!(!bitstream.is_empty());
    assert!(recon[31][31] < 128); // far corner should stay dark, not ring up to mid-grey
  }

  #[test]
  fn non_multiple_dimensions_pad_up_to_ctu_size() {
    let (_n, _bitstream, recon, ysz, xsz) = run(50, 70, &vec![64u8; 70 * 50], 1);
    assert_eq!(xsz, 96);
    assert_eq!(ysz, 64);
    assert_eq!(recon.rows(), 64);
    assert_eq!(recon.cols(), 96);
  }

  #[test]
  fn two_vertical_stripes_reconstruct_within_rounding_error() {
    let mut pixels = vec![0u8; 32 * 32];
    for y in 0..32 {
      for x in 16..32 {
        pixels[y * 32 + x] = 255;
      }
    }
    let (_n, _bitstream, recon, _, _) = run(32, 32, &pixels, 0);
    for y in 0..32 {
      assert!(recon[y][31] as i32 - recon[y][0] as i32 > 64);
    }
  }

  #[test]
  fn encoding_is_deterministic() {
    let pixels = vec![77u8; 32 * 32];
    let (_, a, _, _, _) = run(32, 32, &pixels, 3);
    let (_, b, _, _, _) = run(32, 32, &pixels, 3);
    assert_eq!(a, b);
  }
}
