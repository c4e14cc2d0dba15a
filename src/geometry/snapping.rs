use egui::Pos2;

/// Round a position to the nearest grid intersection.
///
/// Identity when snapping is disabled. Coordinates round half-up, so 13 on a
/// 10-unit grid lands on 10 and 57 lands on 60. Pure; the caller decides
/// when a position goes through here.
pub fn apply_snapping(pos: Pos2, enabled: bool, grid_size: u32) -> Pos2 {
    if !enabled || grid_size == 0 {
        return pos;
    }
    let grid = grid_size as f32;
    Pos2::new(snap_coord(pos.x, grid), snap_coord(pos.y, grid))
}

fn snap_coord(value: f32, grid: f32) -> f32 {
    ((value / grid) + 0.5).floor() * grid
}
