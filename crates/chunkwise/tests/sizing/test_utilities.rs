/// Expected sizes sweeping every decade of the clamp envelope and beyond it,
/// in ascending order.
pub fn ascending_sizes_mb() -> Vec<f64> {
    let mut sizes = vec![-1e3, -1.0, 0.0, 1e-9, 1e-5];
    let mut size = 1e-4;
    while size <= 1e6 {
        sizes.push(size);
        sizes.push(size * 2.5);
        sizes.push(size * 9.99);
        size *= 10.0;
    }
    sizes.sort_by(f64::total_cmp);
    sizes
}
