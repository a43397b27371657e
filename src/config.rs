//! Default exercise geometry: three search areas off the cape, with the
//! corner points given in map pixels and the operator's priors.

/// `((ul_x, ul_y), (lr_x, lr_y), probability)` per area.
pub const DEFAULT_AREAS: [((i32, i32), (i32, i32), f64); 3] = [
    ((130, 265), (180, 315), 0.2),
    ((80, 255), (130, 305), 0.5),
    ((105, 205), (155, 255), 0.3),
];
