//! Standards-conformant H.265/HEVC intra-only encoder for 8-bit
//! monochrome images. A single `qpd6` knob (0..=4, QP = 6*qpd6+4) trades
//! size for fidelity; everything else — CTU/CU partitioning, the 35-mode
//! angular intra predictors, the integer DCT/DST transforms, RDOQ, and
//! CABAC entropy coding — follows the Main profile exactly so any
//! conformant decoder can read the output.

pub mod array2d;
pub mod bitwriter;
pub mod cabac;
pub mod consts;
pub mod context;
pub mod encoder;
pub mod enums;
pub mod hls;
pub mod intra;
pub mod quant;
pub mod residual;
pub mod txfm;
mod util;

pub use encoder::encode_image;
