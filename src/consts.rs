// Fixed lookup tables used throughout the transform, quantisation, intra
// prediction, CABAC and syntax-writer modules. Values are the normative
// HEVC Main-profile constants.

// ---------------------------------------------------------------------
// Transform matrices (§4.1)
// ---------------------------------------------------------------------

pub const DST4_MAT: [[i32; 4]; 4] = [
  [29, 55, 74, 84],
  [74, 74, 0, -74],
  [84, -29, -74, 55],
  [55, -84, 74, -29],
];

pub const DCT8_MAT: [[i32; 8]; 8] = [
  [64, 64, 64, 64, 64, 64, 64, 64],
  [89, 75, 50, 18, -18, -50, -75, -89],
  [83, 36, -36, -83, -83, -36, 36, 83],
  [75, -18, -89, -50, 50, 89, 18, -75],
  [64, -64, -64, 64, 64, -64, -64, 64],
  [50, -89, 18, 75, -75, -18, 89, -50],
  [36, -83, 83, -36, -36, 83, -83, 36],
  [18, -50, 75, -89, 89, -75, 50, -18],
];

pub const DCT16_MAT: [[i32; 16]; 16] = [
  [64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64],
  [90, 87, 80, 70, 57, 43, 25, 9, -9, -25, -43, -57, -70, -80, -87, -90],
  [89, 75, 50, 18, -18, -50, -75, -89, -89, -75, -50, -18, 18, 50, 75, 89],
  [87, 57, 9, -43, -80, -90, -70, -25, 25, 70, 90, 80, 43, -9, -57, -87],
  [83, 36, -36, -83, -83, -36, 36, 83, 83, 36, -36, -83, -83, -36, 36, 83],
  [80, 9, -70, -87, -25, 57, 90, 43, -43, -90, -57, 25, 87, 70, -9, -80],
  [75, -18, -89, -50, 50, 89, 18, -75, -75, 18, 89, 50, -50, -89, -18, 75],
  [70, -43, -87, 9, 90, 25, -80, -57, 57, 80, -25, -90, -9, 87, 43, -70],
  [64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64],
  [57, -80, -25, 90, -9, -87, 43, 70, -70, -43, 87, 9, -90, 25, 80, -57],
  [50, -89, 18, 75, -75, -18, 89, -50, -50, 89, -18, -75, 75, 18, -89, 50],
  [43, -90, 57, 25, -87, 70, 9, -80, 80, -9, -70, 87, -25, -57, 90, -43],
  [36, -83, 83, -36, -36, 83, -83, 36, 36, -83, 83, -36, -36, 83, -83, 36],
  [25, -70, 90, -80, 43, 9, -57, 87, -87, 57, -9, -43, 80, -90, 70, -25],
  [18, -50, 75, -89, 89, -75, 50, -18, -18, 50, -75, 89, -89, 75, -50, 18],
  [9, -25, 43, -57, 70, -80, 87, -90, 90, -87, 80, -70, 57, -43, 25, -9],
];

pub const DCT32_MAT: [[i32; 32]; 32] = [
  [64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64],
  [90, 90, 88, 85, 82, 78, 73, 67, 61, 54, 46, 38, 31, 22, 13, 4, -4, -13, -22, -31, -38, -46, -54, -61, -67, -73, -78, -82, -85, -88, -90, -90],
  [90, 87, 80, 70, 57, 43, 25, 9, -9, -25, -43, -57, -70, -80, -87, -90, -90, -87, -80, -70, -57, -43, -25, -9, 9, 25, 43, 57, 70, 80, 87, 90],
  [90, 82, 67, 46, 22, -4, -31, -54, -73, -85, -90, -88, -78, -61, -38, -13, 13, 38, 61, 78, 88, 90, 85, 73, 54, 31, 4, -22, -46, -67, -82, -90],
  [89, 75, 50, 18, -18, -50, -75, -89, -89, -75, -50, -18, 18, 50, 75, 89, 89, 75, 50, 18, -18, -50, -75, -89, -89, -75, -50, -18, 18, 50, 75, 89],
  [88, 67, 31, -13, -54, -82, -90, -78, -46, -4, 38, 73, 90, 85, 61, 22, -22, -61, -85, -90, -73, -38, 4, 46, 78, 90, 82, 54, 13, -31, -67, -88],
  [87, 57, 9, -43, -80, -90, -70, -25, 25, 70, 90, 80, 43, -9, -57, -87, -87, -57, -9, 43, 80, 90, 70, 25, -25, -70, -90, -80, -43, 9, 57, 87],
  [85, 46, -13, -67, -90, -73, -22, 38, 82, 88, 54, -4, -61, -90, -78, -31, 31, 78, 90, 61, 4, -54, -88, -82, -38, 22, 73, 90, 67, 13, -46, -85],
  [83, 36, -36, -83, -83, -36, 36, 83, 83, 36, -36, -83, -83, -36, 36, 83, 83, 36, -36, -83, -83, -36, 36, 83, 83, 36, -36, -83, -83, -36, 36, 83],
  [82, 22, -54, -90, -61, 13, 78, 85, 31, -46, -90, -67, 4, 73, 88, 38, -38, -88, -73, -4, 67, 90, 46, -31, -85, -78, -13, 61, 90, 54, -22, -82],
  [80, 9, -70, -87, -25, 57, 90, 43, -43, -90, -57, 25, 87, 70, -9, -80, -80, -9, 70, 87, 25, -57, -90, -43, 43, 90, 57, -25, -87, -70, 9, 80],
  [78, -4, -82, -73, 13, 85, 67, -22, -88, -61, 31, 90, 54, -38, -90, -46, 46, 90, 38, -54, -90, -31, 61, 88, 22, -67, -85, -13, 73, 82, 4, -78],
  [75, -18, -89, -50, 50, 89, 18, -75, -75, 18, 89, 50, -50, -89, -18, 75, 75, -18, -89, -50, 50, 89, 18, -75, -75, 18, 89, 50, -50, -89, -18, 75],
  [73, -31, -90, -22, 78, 67, -38, -90, -13, 82, 61, -46, -88, -4, 85, 54, -54, -85, 4, 88, 46, -61, -82, 13, 90, 38, -67, -78, 22, 90, 31, -73],
  [70, -43, -87, 9, 90, 25, -80, -57, 57, 80, -25, -90, -9, 87, 43, -70, -70, 43, 87, -9, -90, -25, 80, 57, -57, -80, 25, 90, 9, -87, -43, 70],
  [67, -54, -78, 38, 85, -22, -90, 4, 90, 13, -88, -31, 82, 46, -73, -61, 61, 73, -46, -82, 31, 88, -13, -90, -4, 90, 22, -85, -38, 78, 54, -67],
  [64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64, 64, -64, -64, 64],
  [61, -73, -46, 82, 31, -88, -13, 90, -4, -90, 22, 85, -38, -78, 54, 67, -67, -54, 78, 38, -85, -22, 90, 4, -90, 13, 88, -31, -82, 46, 73, -61],
  [57, -80, -25, 90, -9, -87, 43, 70, -70, -43, 87, 9, -90, 25, 80, -57, -57, 80, 25, -90, 9, 87, -43, -70, 70, 43, -87, -9, 90, -25, -80, 57],
  [54, -85, -4, 88, -46, -61, 82, 13, -90, 38, 67, -78, -22, 90, -31, -73, 73, 31, -90, 22, 78, -67, -38, 90, -13, -82, 61, 46, -88, 4, 85, -54],
  [50, -89, 18, 75, -75, -18, 89, -50, -50, 89, -18, -75, 75, 18, -89, 50, 50, -89, 18, 75, -75, -18, 89, -50, -50, 89, -18, -75, 75, 18, -89, 50],
  [46, -90, 38, 54, -90, 31, 61, -88, 22, 67, -85, 13, 73, -82, 4, 78, -78, -4, 82, -73, -13, 85, -67, -22, 88, -61, -31, 90, -54, -38, 90, -46],
  [43, -90, 57, 25, -87, 70, 9, -80, 80, -9, -70, 87, -25, -57, 90, -43, -43, 90, -57, -25, 87, -70, -9, 80, -80, 9, 70, -87, 25, 57, -90, 43],
  [38, -88, 73, -4, -67, 90, -46, -31, 85, -78, 13, 61, -90, 54, 22, -82, 82, -22, -54, 90, -61, -13, 78, -85, 31, 46, -90, 67, 4, -73, 88, -38],
  [36, -83, 83, -36, -36, 83, -83, 36, 36, -83, 83, -36, -36, 83, -83, 36, 36, -83, 83, -36, -36, 83, -83, 36, 36, -83, 83, -36, -36, 83, -83, 36],
  [31, -78, 90, -61, 4, 54, -88, 82, -38, -22, 73, -90, 67, -13, -46, 85, -85, 46, 13, -67, 90, -73, 22, 38, -82, 88, -54, -4, 61, -90, 78, -31],
  [25, -70, 90, -80, 43, 9, -57, 87, -87, 57, -9, -43, 80, -90, 70, -25, -25, 70, -90, 80, -43, -9, 57, -87, 87, -57, 9, 43, -80, 90, -70, 25],
  [22, -61, 85, -90, 73, -38, -4, 46, -78, 90, -82, 54, -13, -31, 67, -88, 88, -67, 31, 13, -54, 82, -90, 78, -46, 4, 38, -73, 90, -85, 61, -22],
  [18, -50, 75, -89, 89, -75, 50, -18, -18, 50, -75, 89, -89, 75, -50, 18, 18, -50, 75, -89, 89, -75, 50, -18, -18, 50, -75, 89, -89, 75, -50, 18],
  [13, -38, 61, -78, 88, -90, 85, -73, 54, -31, 4, 22, -46, 67, -82, 90, -90, 82, -67, 46, -22, -4, 31, -54, 73, -85, 90, -88, 78, -61, 38, -13],
  [9, -25, 43, -57, 70, -80, 87, -90, 90, -87, 80, -70, 57, -43, 25, -9, -9, 25, -43, 57, -70, 80, -87, 90, -90, 87, -80, 70, -57, 43, -25, 9],
  [4, -13, 22, -31, 38, -46, 54, -61, 67, -73, 78, -82, 85, -88, 90, -90, 90, -90, 88, -85, 82, -78, 73, -67, 61, -54, 46, -38, 31, -22, 13, -4],
];

// Indexed by sz/8: {4x4, 8x8, 16x16, unused-32, 32x32}
pub const TABLE_A_FOR_TRANSFORM: [i32; 5] = [1, 2, 3, -1, 4];

// ---------------------------------------------------------------------
// Quantisation / rate-distortion (§4.2)
// ---------------------------------------------------------------------

pub const RDCOST_WEIGHT_DIST: [i32; 5] = [11, 11, 11, 5, 1];
pub const RDCOST_WEIGHT_BITS: [i32; 5] = [1, 4, 16, 29, 23];

pub const LEVEL_RATE_TABLE: [i32; 6] = [0, 70000, 90000, 92000, 157536, 190304];

// Indexed by sz/8
pub const DIST_SHIFT_TABLE: [i32; 5] = [8, 7, 6, -1, 5];
pub const LEVEL_SHIFT_TABLE: [i32; 5] = [19, 18, 17, -1, 16];
pub const Q_SHIFT_TABLE: [i32; 5] = [5, 4, 3, -1, 2];

// ---------------------------------------------------------------------
// Intra prediction (§4.3)
// ---------------------------------------------------------------------

// WHETHER_FILTER_BORDER_FOR_Y_TABLE[sz/8][pmode]; sz/8 == 3 (24) is unused.
pub const WHETHER_FILTER_BORDER_FOR_Y_TABLE: [[u8; 35]; 5] = [
  [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
  [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
  [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
  [0; 35],
  [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1],
];

pub const ANGLE_TABLE: [i32; 35] = [
  0, 0, 32, 26, 21, 17, 13, 9, 5, 2, 0, -2, -5, -9, -13, -17, -21, -26, -32, -26, -21, -17, -13, -9,
  -5, -2, 0, 2, 5, 9, 13, 17, 21, 26, 32,
];

pub const ABS_INV_ANGLE_TABLE: [i32; 35] = [
  0, 0, 256, 315, 390, 482, 630, 910, 1638, 4096, 0, 4096, 1638, 910, 630, 482, 390, 315, 256, 315,
  390, 482, 630, 910, 1638, 4096, 0, 4096, 1638, 910, 630, 482, 390, 315, 256,
];

// ---------------------------------------------------------------------
// Syntax writer (§4.4): scan orders, significance-context tables
// ---------------------------------------------------------------------

pub const GROUP_INDEX_TABLE: [u8; 32] = [
  0, 1, 2, 3, 4, 4, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8, 8, 9, 9, 9, 9, 9, 9, 9, 9,
];
pub const MIN_IN_GROUP_TABLE: [u8; 10] = [0, 1, 2, 3, 4, 6, 8, 12, 16, 24];

// [ch != Y][sz/8]
pub const LAST_XY_ADDR_TABLE: [[u8; 5]; 2] = [[0, 1, 2, 0, 3], [4, 4, 4, 0, 4]];
pub const LAST_XY_SFT_TABLE: [[u8; 5]; 2] = [[0, 1, 1, 0, 1], [0, 1, 2, 0, 3]];

pub const CTX_OFFSET_4X4_TABLE: [[u8; 4]; 4] = [[0, 1, 4, 5], [2, 3, 4, 5], [6, 6, 8, 8], [7, 7, 8, 8]];
pub const CTX_OFFSET_POSITION: [u8; 7] = [2, 1, 1, 0, 0, 0, 0];

pub const SCAN_HOR_8X8: [(u8, u8); 64] = [
  (0,0),(0,1),(0,2),(0,3),(1,0),(1,1),(1,2),(1,3),(2,0),(2,1),(2,2),(2,3),(3,0),(3,1),(3,2),(3,3),
  (0,4),(0,5),(0,6),(0,7),(1,4),(1,5),(1,6),(1,7),(2,4),(2,5),(2,6),(2,7),(3,4),(3,5),(3,6),(3,7),
  (4,0),(4,1),(4,2),(4,3),(5,0),(5,1),(5,2),(5,3),(6,0),(6,1),(6,2),(6,3),(7,0),(7,1),(7,2),(7,3),
  (4,4),(4,5),(4,6),(4,7),(5,4),(5,5),(5,6),(5,7),(6,4),(6,5),(6,6),(6,7),(7,4),(7,5),(7,6),(7,7),
];

pub const SCAN_VER_8X8: [(u8, u8); 64] = [
  (0,0),(1,0),(2,0),(3,0),(0,1),(1,1),(2,1),(3,1),(0,2),(1,2),(2,2),(3,2),(0,3),(1,3),(2,3),(3,3),
  (4,0),(5,0),(6,0),(7,0),(4,1),(5,1),(6,1),(7,1),(4,2),(5,2),(6,2),(7,2),(4,3),(5,3),(6,3),(7,3),
  (0,4),(1,4),(2,4),(3,4),(0,5),(1,5),(2,5),(3,5),(0,6),(1,6),(2,6),(3,6),(0,7),(1,7),(2,7),(3,7),
  (4,4),(5,4),(6,4),(7,4),(4,5),(5,5),(6,5),(7,5),(4,6),(5,6),(6,6),(7,6),(4,7),(5,7),(6,7),(7,7),
];

pub const SCAN_DIAG_8X8: [(u8, u8); 64] = [
  (0,0),(1,0),(0,1),(2,0),(1,1),(0,2),(3,0),(2,1),(1,2),(0,3),(3,1),(2,2),(1,3),(3,2),(2,3),(3,3),
  (4,0),(5,0),(4,1),(6,0),(5,1),(4,2),(7,0),(6,1),(5,2),(4,3),(7,1),(6,2),(5,3),(7,2),(6,3),(7,3),
  (0,4),(1,4),(0,5),(2,4),(1,5),(0,6),(3,4),(2,5),(1,6),(0,7),(3,5),(2,6),(1,7),(3,6),(2,7),(3,7),
  (4,4),(5,4),(4,5),(6,4),(5,5),(4,6),(7,4),(6,5),(5,6),(4,7),(7,5),(6,6),(5,7),(7,6),(6,7),(7,7),
];

pub const SCAN_DIAG_16X16: [(u8, u8); 256] = [
  (0,0),(1,0),(0,1),(2,0),(1,1),(0,2),(3,0),(2,1),(1,2),(0,3),(3,1),(2,2),(1,3),(3,2),(2,3),(3,3),
  (4,0),(5,0),(4,1),(6,0),(5,1),(4,2),(7,0),(6,1),(5,2),(4,3),(7,1),(6,2),(5,3),(7,2),(6,3),(7,3),
  (0,4),(1,4),(0,5),(2,4),(1,5),(0,6),(3,4),(2,5),(1,6),(0,7),(3,5),(2,6),(1,7),(3,6),(2,7),(3,7),
  (8,0),(9,0),(8,1),(10,0),(9,1),(8,2),(11,0),(10,1),(9,2),(8,3),(11,1),(10,2),(9,3),(11,2),(10,3),(11,3),
  (4,4),(5,4),(4,5),(6,4),(5,5),(4,6),(7,4),(6,5),(5,6),(4,7),(7,5),(6,6),(5,7),(7,6),(6,7),(7,7),
  (0,8),(1,8),(0,9),(2,8),(1,9),(0,10),(3,8),(2,9),(1,10),(0,11),(3,9),(2,10),(1,11),(3,10),(2,11),(3,11),
  (12,0),(13,0),(12,1),(14,0),(13,1),(12,2),(15,0),(14,1),(13,2),(12,3),(15,1),(14,2),(13,3),(15,2),(14,3),(15,3),
  (8,4),(9,4),(8,5),(10,4),(9,5),(8,6),(11,4),(10,5),(9,6),(8,7),(11,5),(10,6),(9,7),(11,6),(10,7),(11,7),
  (4,8),(5,8),(4,9),(6,8),(5,9),(4,10),(7,8),(6,9),(5,10),(4,11),(7,9),(6,10),(5,11),(7,10),(6,11),(7,11),
  (0,12),(1,12),(0,13),(2,12),(1,13),(0,14),(3,12),(2,13),(1,14),(0,15),(3,13),(2,14),(1,15),(3,14),(2,15),(3,15),
  (12,4),(13,4),(12,5),(14,4),(13,5),(12,6),(15,4),(14,5),(13,6),(12,7),(15,5),(14,6),(13,7),(15,6),(14,7),(15,7),
  (8,8),(9,8),(8,9),(10,8),(9,9),(8,10),(11,8),(10,9),(9,10),(8,11),(11,9),(10,10),(9,11),(11,10),(10,11),(11,11),
  (4,12),(5,12),(4,13),(6,12),(5,13),(4,14),(7,12),(6,13),(5,14),(4,15),(7,13),(6,14),(5,15),(7,14),(6,15),(7,15),
  (12,8),(13,8),(12,9),(14,8),(13,9),(12,10),(15,8),(14,9),(13,10),(12,11),(15,9),(14,10),(13,11),(15,10),(14,11),(15,11),
  (8,12),(9,12),(8,13),(10,12),(9,13),(8,14),(11,12),(10,13),(9,14),(8,15),(11,13),(10,14),(9,15),(11,14),(10,15),(11,15),
  (12,12),(13,12),(12,13),(14,12),(13,13),(12,14),(15,12),(14,13),(13,14),(12,15),(15,13),(14,14),(13,15),(15,14),(14,15),(15,15),
];

pub const SCAN_DIAG_32X32: [(u8, u8); 1024] = [
  (0,0),(1,0),(0,1),(2,0),(1,1),(0,2),(3,0),(2,1),(1,2),(0,3),(3,1),(2,2),(1,3),(3,2),(2,3),(3,3),
  (4,0),(5,0),(4,1),(6,0),(5,1),(4,2),(7,0),(6,1),(5,2),(4,3),(7,1),(6,2),(5,3),(7,2),(6,3),(7,3),
  (0,4),(1,4),(0,5),(2,4),(1,5),(0,6),(3,4),(2,5),(1,6),(0,7),(3,5),(2,6),(1,7),(3,6),(2,7),(3,7),
  (8,0),(9,0),(8,1),(10,0),(9,1),(8,2),(11,0),(10,1),(9,2),(8,3),(11,1),(10,2),(9,3),(11,2),(10,3),(11,3),
  (4,4),(5,4),(4,5),(6,4),(5,5),(4,6),(7,4),(6,5),(5,6),(4,7),(7,5),(6,6),(5,7),(7,6),(6,7),(7,7),
  (0,8),(1,8),(0,9),(2,8),(1,9),(0,10),(3,8),(2,9),(1,10),(0,11),(3,9),(2,10),(1,11),(3,10),(2,11),(3,11),
  (12,0),(13,0),(12,1),(14,0),(13,1),(12,2),(15,0),(14,1),(13,2),(12,3),(15,1),(14,2),(13,3),(15,2),(14,3),(15,3),
  (8,4),(9,4),(8,5),(10,4),(9,5),(8,6),(11,4),(10,5),(9,6),(8,7),(11,5),(10,6),(9,7),(11,6),(10,7),(11,7),
  (4,8),(5,8),(4,9),(6,8),(5,9),(4,10),(7,8),(6,9),(5,10),(4,11),(7,9),(6,10),(5,11),(7,10),(6,11),(7,11),
  (0,12),(1,12),(0,13),(2,12),(1,13),(0,14),(3,12),(2,13),(1,14),(0,15),(3,13),(2,14),(1,15),(3,14),(2,15),(3,15),
  (16,0),(17,0),(16,1),(18,0),(17,1),(16,2),(19,0),(18,1),(17,2),(16,3),(19,1),(18,2),(17,3),(19,2),(18,3),(19,3),
  (12,4),(13,4),(12,5),(14,4),(13,5),(12,6),(15,4),(14,5),(13,6),(12,7),(15,5),(14,6),(13,7),(15,6),(14,7),(15,7),
  (8,8),(9,8),(8,9),(10,8),(9,9),(8,10),(11,8),(10,9),(9,10),(8,11),(11,9),(10,10),(9,11),(11,10),(10,11),(11,11),
  (4,12),(5,12),(4,13),(6,12),(5,13),(4,14),(7,12),(6,13),(5,14),(4,15),(7,13),(6,14),(5,15),(7,14),(6,15),(7,15),
  (0,16),(1,16),(0,17),(2,16),(1,17),(0,18),(3,16),(2,17),(1,18),(0,19),(3,17),(2,18),(1,19),(3,18),(2,19),(3,19),
  (20,0),(21,0),(20,1),(22,0),(21,1),(20,2),(23,0),(22,1),(21,2),(20,3),(23,1),(22,2),(21,3),(23,2),(22,3),(23,3),
  (16,4),(17,4),(16,5),(18,4),(17,5),(16,6),(19,4),(18,5),(17,6),(16,7),(19,5),(18,6),(17,7),(19,6),(18,7),(19,7),
  (12,8),(13,8),(12,9),(14,8),(13,9),(12,10),(15,8),(14,9),(13,10),(12,11),(15,9),(14,10),(13,11),(15,10),(14,11),(15,11),
  (8,12),(9,12),(8,13),(10,12),(9,13),(8,14),(11,12),(10,13),(9,14),(8,15),(11,13),(10,14),(9,15),(11,14),(10,15),(11,15),
  (4,16),(5,16),(4,17),(6,16),(5,17),(4,18),(7,16),(6,17),(5,18),(4,19),(7,17),(6,18),(5,19),(7,18),(6,19),(7,19),
  (0,20),(1,20),(0,21),(2,20),(1,21),(0,22),(3,20),(2,21),(1,22),(0,23),(3,21),(2,22),(1,23),(3,22),(2,23),(3,23),
  (24,0),(25,0),(24,1),(26,0),(25,1),(24,2),(27,0),(26,1),(25,2),(24,3),(27,1),(26,2),(25,3),(27,2),(26,3),(27,3),
  (20,4),(21,4),(20,5),(22,4),(21,5),(20,6),(23,4),(22,5),(21,6),(20,7),(23,5),(22,6),(21,7),(23,6),(22,7),(23,7),
  (16,8),(17,8),(16,9),(18,8),(17,9),(16,10),(19,8),(18,9),(17,10),(16,11),(19,9),(18,10),(17,11),(19,10),(18,11),(19,11),
  (12,12),(13,12),(12,13),(14,12),(13,13),(12,14),(15,12),(14,13),(13,14),(12,15),(15,13),(14,14),(13,15),(15,14),(14,15),(15,15),
  (8,16),(9,16),(8,17),(10,16),(9,17),(8,18),(11,16),(10,17),(9,18),(8,19),(11,17),(10,18),(9,19),(11,18),(10,19),(11,19),
  (4,20),(5,20),(4,21),(6,20),(5,21),(4,22),(7,20),(6,21),(5,22),(4,23),(7,21),(6,22),(5,23),(7,22),(6,23),(7,23),
  (0,24),(1,24),(0,25),(2,24),(1,25),(0,26),(3,24),(2,25),(1,26),(0,27),(3,25),(2,26),(1,27),(3,26),(2,27),(3,27),
  (28,0),(29,0),(28,1),(30,0),(29,1),(28,2),(31,0),(30,1),(29,2),(28,3),(31,1),(30,2),(29,3),(31,2),(30,3),(31,3),
  (24,4),(25,4),(24,5),(26,4),(25,5),(24,6),(27,4),(26,5),(25,6),(24,7),(27,5),(26,6),(25,7),(27,6),(26,7),(27,7),
  (20,8),(21,8),(20,9),(22,8),(21,9),(20,10),(23,8),(22,9),(21,10),(20,11),(23,9),(22,10),(21,11),(23,10),(22,11),(23,11),
  (16,12),(17,12),(16,13),(18,12),(17,13),(16,14),(19,12),(18,13),(17,14),(16,15),(19,13),(18,14),(17,15),(19,14),(18,15),(19,15),
  (12,16),(13,16),(12,17),(14,16),(13,17),(12,18),(15,16),(14,17),(13,18),(12,19),(15,17),(14,18),(13,19),(15,18),(14,19),(15,19),
  (8,20),(9,20),(8,21),(10,20),(9,21),(8,22),(11,20),(10,21),(9,22),(8,23),(11,21),(10,22),(9,23),(11,22),(10,23),(11,23),
  (4,24),(5,24),(4,25),(6,24),(5,25),(4,26),(7,24),(6,25),(5,26),(4,27),(7,25),(6,26),(5,27),(7,26),(6,27),(7,27),
  (0,28),(1,28),(0,29),(2,28),(1,29),(0,30),(3,28),(2,29),(1,30),(0,31),(3,29),(2,30),(1,31),(3,30),(2,31),(3,31),
  (28,4),(29,4),(28,5),(30,4),(29,5),(28,6),(31,4),(30,5),(29,6),(28,7),(31,5),(30,6),(29,7),(31,6),(30,7),(31,7),
  (24,8),(25,8),(24,9),(26,8),(25,9),(24,10),(27,8),(26,9),(25,10),(24,11),(27,9),(26,10),(25,11),(27,10),(26,11),(27,11),
  (20,12),(21,12),(20,13),(22,12),(21,13),(20,14),(23,12),(22,13),(21,14),(20,15),(23,13),(22,14),(21,15),(23,14),(22,15),(23,15),
  (16,16),(17,16),(16,17),(18,16),(17,17),(16,18),(19,16),(18,17),(17,18),(16,19),(19,17),(18,18),(17,19),(19,18),(18,19),(19,19),
  (12,20),(13,20),(12,21),(14,20),(13,21),(12,22),(15,20),(14,21),(13,22),(12,23),(15,21),(14,22),(13,23),(15,22),(14,23),(15,23),
  (8,24),(9,24),(8,25),(10,24),(9,25),(8,26),(11,24),(10,25),(9,26),(8,27),(11,25),(10,26),(9,27),(11,26),(10,27),(11,27),
  (4,28),(5,28),(4,29),(6,28),(5,29),(4,30),(7,28),(6,29),(5,30),(4,31),(7,29),(6,30),(5,31),(7,30),(6,31),(7,31),
  (28,8),(29,8),(28,9),(30,8),(29,9),(28,10),(31,8),(30,9),(29,10),(28,11),(31,9),(30,10),(29,11),(31,10),(30,11),(31,11),
  (24,12),(25,12),(24,13),(26,12),(25,13),(24,14),(27,12),(26,13),(25,14),(24,15),(27,13),(26,14),(25,15),(27,14),(26,15),(27,15),
  (20,16),(21,16),(20,17),(22,16),(21,17),(20,18),(23,16),(22,17),(21,18),(20,19),(23,17),(22,18),(21,19),(23,18),(22,19),(23,19),
  (16,20),(17,20),(16,21),(18,20),(17,21),(16,22),(19,20),(18,21),(17,22),(16,23),(19,21),(18,22),(17,23),(19,22),(18,23),(19,23),
  (12,24),(13,24),(12,25),(14,24),(13,25),(12,26),(15,24),(14,25),(13,26),(12,27),(15,25),(14,26),(13,27),(15,26),(14,27),(15,27),
  (8,28),(9,28),(8,29),(10,28),(9,29),(8,30),(11,28),(10,29),(9,30),(8,31),(11,29),(10,30),(9,31),(11,30),(10,31),(11,31),
  (28,12),(29,12),(28,13),(30,12),(29,13),(28,14),(31,12),(30,13),(29,14),(28,15),(31,13),(30,14),(29,15),(31,14),(30,15),(31,15),
  (24,16),(25,16),(24,17),(26,16),(25,17),(24,18),(27,16),(26,17),(25,18),(24,19),(27,17),(26,18),(25,19),(27,18),(26,19),(27,19),
  (20,20),(21,20),(20,21),(22,20),(21,21),(20,22),(23,20),(22,21),(21,22),(20,23),(23,21),(22,22),(21,23),(23,22),(22,23),(23,23),
  (16,24),(17,24),(16,25),(18,24),(17,25),(16,26),(19,24),(18,25),(17,26),(16,27),(19,25),(18,26),(17,27),(19,26),(18,27),(19,27),
  (12,28),(13,28),(12,29),(14,28),(13,29),(12,30),(15,28),(14,29),(13,30),(12,31),(15,29),(14,30),(13,31),(15,30),(14,31),(15,31),
  (28,16),(29,16),(28,17),(30,16),(29,17),(28,18),(31,16),(30,17),(29,18),(28,19),(31,17),(30,18),(29,19),(31,18),(30,19),(31,19),
  (24,20),(25,20),(24,21),(26,20),(25,21),(24,22),(27,20),(26,21),(25,22),(24,23),(27,21),(26,22),(25,23),(27,22),(26,23),(27,23),
  (20,24),(21,24),(20,25),(22,24),(21,25),(20,26),(23,24),(22,25),(21,26),(20,27),(23,25),(22,26),(21,27),(23,26),(22,27),(23,27),
  (16,28),(17,28),(16,29),(18,28),(17,29),(16,30),(19,28),(18,29),(17,30),(16,31),(19,29),(18,30),(17,31),(19,30),(18,31),(19,31),
  (28,20),(29,20),(28,21),(30,20),(29,21),(28,22),(31,20),(30,21),(29,22),(28,23),(31,21),(30,22),(29,23),(31,22),(30,23),(31,23),
  (24,24),(25,24),(24,25),(26,24),(25,25),(24,26),(27,24),(26,25),(25,26),(24,27),(27,25),(26,26),(25,27),(27,26),(26,27),(27,27),
  (20,28),(21,28),(20,29),(22,28),(21,29),(20,30),(23,28),(22,29),(21,30),(20,31),(23,29),(22,30),(21,31),(23,30),(22,31),(23,31),
  (28,24),(29,24),(28,25),(30,24),(29,25),(28,26),(31,24),(30,25),(29,26),(28,27),(31,25),(30,26),(29,27),(31,26),(30,27),(31,27),
  (24,28),(25,28),(24,29),(26,28),(25,29),(24,30),(27,28),(26,29),(25,30),(24,31),(27,29),(26,30),(25,31),(27,30),(26,31),(27,31),
  (28,28),(29,28),(28,29),(30,28),(29,29),(28,30),(31,28),(30,29),(29,30),(28,31),(31,29),(30,30),(29,31),(31,30),(30,31),(31,31),
];

// ---------------------------------------------------------------------
// CABAC (§4.5)
// ---------------------------------------------------------------------

pub const CONTEXT_NEXT_STATE_MPS: [u8; 128] = [
  2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
  29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53,
  54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78,
  79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102,
  103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122,
  123, 124, 125, 124, 125, 126, 127,
];

pub const CONTEXT_NEXT_STATE_LPS: [u8; 128] = [
  1, 0, 0, 1, 2, 3, 4, 5, 4, 5, 8, 9, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 18, 19, 22, 23,
  22, 23, 24, 25, 26, 27, 26, 27, 30, 31, 30, 31, 32, 33, 32, 33, 36, 37, 36, 37, 38, 39, 38, 39, 42,
  43, 42, 43, 44, 45, 44, 45, 46, 47, 48, 49, 48, 49, 50, 51, 52, 53, 52, 53, 54, 55, 54, 55, 56, 57,
  58, 59, 58, 59, 60, 61, 60, 61, 60, 61, 62, 63, 64, 65, 64, 65, 66, 67, 66, 67, 66, 67, 68, 69, 68,
  69, 70, 71, 70, 71, 70, 71, 72, 73, 72, 73, 72, 73, 74, 75, 74, 75, 74, 75, 76, 77, 76, 77, 126, 127,
];

pub const CABAC_LPS_TABLE: [[u8; 4]; 64] = [
  [128, 176, 208, 240], [128, 167, 197, 227], [128, 158, 187, 216], [123, 150, 178, 205],
  [116, 142, 169, 195], [111, 135, 160, 185], [105, 128, 152, 175], [100, 122, 144, 166],
  [95, 116, 137, 158], [90, 110, 130, 150], [85, 104, 123, 142], [81, 99, 117, 135],
  [77, 94, 111, 128], [73, 89, 105, 122], [69, 85, 100, 116], [66, 80, 95, 110],
  [62, 76, 90, 104], [59, 72, 86, 99], [56, 69, 81, 94], [53, 65, 77, 89],
  [51, 62, 73, 85], [48, 59, 69, 80], [46, 56, 66, 76], [43, 53, 63, 72],
  [41, 50, 59, 69], [39, 48, 56, 65], [37, 45, 54, 62], [35, 43, 51, 59],
  [33, 41, 48, 56], [32, 39, 46, 53], [30, 37, 43, 50], [29, 35, 41, 48],
  [27, 33, 39, 45], [26, 31, 37, 43], [24, 30, 35, 41], [23, 28, 33, 39],
  [22, 27, 32, 37], [21, 26, 30, 35], [20, 24, 29, 33], [19, 23, 27, 31],
  [18, 22, 26, 30], [17, 21, 25, 28], [16, 20, 23, 27], [15, 19, 22, 25],
  [14, 18, 21, 24], [14, 17, 20, 23], [13, 16, 19, 22], [12, 15, 18, 21],
  [12, 14, 17, 20], [11, 14, 16, 19], [11, 13, 15, 18], [10, 12, 15, 17],
  [10, 12, 14, 16], [9, 11, 13, 15], [9, 11, 12, 14], [8, 10, 12, 14],
  [8, 9, 11, 13], [7, 9, 11, 12], [7, 9, 10, 12], [7, 8, 10, 11],
  [6, 8, 9, 11], [6, 7, 9, 10], [6, 7, 8, 9], [2, 2, 2, 2],
];

pub const CABAC_RENORM_TABLE: [u8; 32] = [
  6, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

// ---------------------------------------------------------------------
// High-level syntax (§4.8): fixed NAL byte blobs
// ---------------------------------------------------------------------

pub const VPS: [u8; 27] = [
  0x00, 0x00, 0x01, 0x40, 0x01, 0x0C, 0x01, 0xFF, 0xFF, 0x03, 0x10, 0x00, 0x00, 0x03, 0x00, 0x00,
  0x03, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0xB4, 0xF0, 0x24,
];

pub const SPS_PREFIX: [u8; 22] = [
  0x00, 0x00, 0x01, 0x42, 0x01, 0x01, 0x03, 0x10, 0x00, 0x00, 0x03, 0x00, 0x00, 0x03, 0x00, 0x00,
  0x03, 0x00, 0x00, 0x03, 0x00, 0xB4,
];

pub const PPS: [u8; 11] = [0x00, 0x00, 0x01, 0x44, 0x01, 0xC0, 0x90, 0x91, 0x81, 0xD9, 0x20];

// Indexed by qpd6 (0..=4)
pub const SLICE_HEADERS: [[u8; 8]; 5] = [
  [0x00, 0x00, 0x01, 0x26, 0x01, 0xAC, 0x16, 0xDE],
  [0x00, 0x00, 0x01, 0x26, 0x01, 0xAC, 0x10, 0xDE],
  [0x00, 0x00, 0x01, 0x26, 0x01, 0xAC, 0x2B, 0x78],
  [0x00, 0x00, 0x01, 0x26, 0x01, 0xAC, 0x4D, 0xE0],
  [0x00, 0x00, 0x01, 0x26, 0x01, 0xAC, 0x97, 0x80],
];
