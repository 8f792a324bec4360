// High-level syntax: the fixed VPS/SPS/PPS/slice-header NAL blobs, with
// the SPS's bit-packed picture dimensions spliced in. Each NAL has its
// own generator, callable (and testable) independently, the way the
// teacher exposes sequence/frame header generation as separate methods
// rather than inlining them into one monolithic header writer.

use crate::bitwriter::BitWriter;
use crate::consts::{PPS, SLICE_HEADERS, SPS_PREFIX, VPS};

pub(crate) fn generate_vps() -> Vec<u8> {
  VPS.to_vec()
}

// SPS: fixed prefix, then the bit-packed picture dimensions as ue(v),
// then the remaining fixed fields, byte-aligned.
pub(crate) fn generate_sps(ysz: usize, xsz: usize) -> Vec<u8> {
  let mut w = BitWriter::new();
  w.put_bytes(&SPS_PREFIX);
  w.put_bits(0x0A, 4);
  w.put_uvlc(xsz as i32);
  w.put_uvlc(ysz as i32);
  w.put_bits(0x197EE4, 22);
  // max_transform_hierarchy_depth_intra = 1
  w.put_bits(0x681ED1, 24);
  w.align_to_byte();
  w.into_bytes()
}

pub(crate) fn generate_pps() -> Vec<u8> {
  PPS.to_vec()
}

pub(crate) fn generate_slice_header(qpd6: usize) -> Vec<u8> {
  SLICE_HEADERS[qpd6].to_vec()
}

// Builds the full per-image header: VPS, SPS (with xsz/ysz coded as ue(v)),
// PPS, and the slice header selected by qpd6. The CTU payload plus a final
// CABACputTerminate/CABACfinish bitstream are appended by the caller.
pub fn generate_picture_header(qpd6: usize, ysz: usize, xsz: usize) -> Vec<u8> {
  let mut out = generate_vps();
  out.extend(generate_sps(ysz, xsz));
  out.extend(generate_pps());
  out.extend(generate_slice_header(qpd6));
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn header_is_byte_aligned_and_nonempty() {
    let hdr = generate_picture_header(2, 64, 96);
    assert!(!hdr.is_empty());
    assert!(hdr.starts_with(&[0x00, 0x00, 0x01, 0x40])); // VPS NAL start code + header
  }

  #[test]
  fn slice_header_selected_by_qp() {
    for qpd6 in 0..5 {
      let hdr = generate_picture_header(qpd6, 32, 32);
      assert!(hdr.ends_with(&SLICE_HEADERS[qpd6]));
    }
  }

  #[test]
  fn vps_pps_match_fixed_tables() {
    assert_eq!(generate_vps(), VPS.to_vec());
    assert_eq!(generate_pps(), PPS.to_vec());
  }

  #[test]
  fn sps_encodes_requested_dimensions() {
    let sps_small = generate_sps(32, 32);
    let sps_large = generate_sps(8192, 8192);
    assert_ne!(sps_small, sps_large);
    assert!(sps_small.starts_with(&SPS_PREFIX));
  }
}
