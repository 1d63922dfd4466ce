//! Tabulated Yb3+ cross-section data.
//!
//! Empirical calibration samples for a Yb3+ doped silica fiber. All three
//! tables are index-aligned: `EMISSION_PM2[i]` and `ABSORPTION_PM2[i]` are
//! the cross-sections measured at `WAVELENGTHS_NM[i]`.

/// Number of tabulated knots.
pub const KNOT_COUNT: usize = 98;

/// Sample wavelengths in nm, strictly increasing (848-1180 nm).
pub const WAVELENGTHS_NM: [f64; 98] = [
    848.0, 852.0, 856.0, 860.0, 864.0, 868.0, 872.0, 876.0,
    880.0, 884.0, 888.0, 892.0, 896.0, 900.0, 904.0, 908.0,
    912.0, 916.0, 920.0, 924.0, 928.0, 932.0, 936.0, 940.0,
    944.0, 948.0, 952.0, 956.0, 960.0, 964.0, 968.0, 969.0,
    970.0, 971.0, 972.0, 973.0, 974.0, 975.0, 976.0, 977.0,
    978.0, 979.0, 980.0, 981.0, 982.0, 983.0, 984.0, 985.0,
    986.0, 988.0, 992.0, 996.0, 1000.0, 1004.0, 1008.0, 1012.0,
    1016.0, 1020.0, 1024.0, 1028.0, 1032.0, 1036.0, 1040.0, 1044.0,
    1048.0, 1052.0, 1056.0, 1060.0, 1064.0, 1068.0, 1072.0, 1076.0,
    1080.0, 1084.0, 1088.0, 1092.0, 1096.0, 1100.0, 1104.0, 1108.0,
    1112.0, 1116.0, 1120.0, 1124.0, 1128.0, 1132.0, 1136.0, 1140.0,
    1144.0, 1148.0, 1152.0, 1156.0, 1160.0, 1164.0, 1168.0, 1172.0,
    1176.0, 1180.0,
];

/// Stimulated-emission cross-section in pm² at each wavelength.
pub const EMISSION_PM2: [f64; 98] = [
    2.2e-5, 3.5e-5, 6.3e-5, 1.1e-4, 1.7e-4, 2.7e-4, 4.4e-4, 6.9e-4,
    0.0011, 0.0017, 0.0026, 0.0039, 0.0058, 0.0086, 0.012, 0.017,
    0.022, 0.029, 0.034, 0.039, 0.044, 0.048, 0.05, 0.053,
    0.057, 0.062, 0.074, 0.095, 0.13, 0.17, 0.26, 0.34,
    0.46, 0.70, 1.08, 1.58, 2.14, 2.65, 2.97, 2.94,
    2.71, 2.28, 1.78, 1.29, 0.91, 0.67, 0.53, 0.45,
    0.41, 0.36, 0.33, 0.33, 0.36, 0.40, 0.46, 0.53,
    0.60, 0.65, 0.65, 0.65, 0.60, 0.55, 0.49, 0.44,
    0.39, 0.35, 0.33, 0.31, 0.30, 0.29, 0.27, 0.26,
    0.23, 0.22, 0.21, 0.19, 0.18, 0.16, 0.14, 0.12,
    0.11, 0.098, 0.088, 0.076, 0.071, 0.061, 0.055, 0.047,
    0.042, 0.035, 0.031, 0.027, 0.023, 0.021, 0.018, 0.014,
    0.014, 0.012,
];

/// Absorption cross-section in pm² at each wavelength.
pub const ABSORPTION_PM2: [f64; 98] = [
    0.033, 0.041, 0.057, 0.075, 0.090, 0.11, 0.14, 0.17,
    0.21, 0.26, 0.31, 0.37, 0.43, 0.50, 0.57, 0.62,
    0.65, 0.65, 0.62, 0.57, 0.51, 0.44, 0.38, 0.32,
    0.28, 0.24, 0.23, 0.24, 0.26, 0.28, 0.35, 0.44,
    0.57, 0.83, 1.21, 1.68, 2.17, 2.55, 2.69, 2.53,
    2.22, 1.77, 1.32, 0.91, 0.61, 0.43, 0.32, 0.26,
    0.23, 0.18, 0.14, 0.11, 0.099, 0.092, 0.088, 0.084,
    0.078, 0.070, 0.059, 0.049, 0.038, 0.029, 0.022, 0.016,
    0.012, 0.009, 0.0072, 0.0057, 0.0046, 0.0038, 0.0033, 0.0024,
    0.0018, 0.0015, 0.0012, 9.5e-4, 7.3e-4, 5.6e-4, 4.2e-4, 3.2e-4,
    2.4e-4, 1.9e-4, 1.4e-4, 1.1e-4, 8.5e-5, 6.3e-5, 4.9e-5, 3.6e-5,
    2.8e-5, 2.0e-5, 1.6e-5, 1.1e-5, 8.6e-6, 6.8e-6, 4.9e-6, 3.5e-6,
    3.1e-6, 2.2e-6,
];
