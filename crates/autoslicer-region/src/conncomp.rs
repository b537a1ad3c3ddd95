//! Connected component labeling
//!
//! Labels the foreground regions of a mask with contiguous positive
//! integers using a two-pass union-find scan. Labels are numbered by
//! discovery order: component 1 is the one whose first foreground pixel
//! comes earliest in a top-to-bottom, left-to-right scan. That order is
//! an observable contract (it determines output sprite numbering), so
//! it must not depend on hash iteration or other unordered state.

use autoslicer_core::{BBox, Mask};

/// Connectivity rule for component analysis
///
/// Four-way is the default: diagonally touching sprites stay separate,
/// which matches typical sprite-sheet layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// A labeled copy of a mask
///
/// Label 0 is background; labels `1..=count` identify the components,
/// contiguous with no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelGrid {
    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of components
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Get the label at (x, y)
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn label(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Get the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn label_unchecked(&self, x: u32, y: u32) -> u32 {
        self.labels[y as usize * self.width as usize + x as usize]
    }

    /// Raw access to the labels, row-major
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }
}

/// Union-Find (disjoint set) over provisional labels
///
/// Slot 0 is reserved for background so provisional labels start at 1.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Allocate a fresh singleton set and return its label
    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Find the root of a label, with path halving
    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    /// Merge the sets containing two labels, keeping the smaller root
    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Label the connected foreground components of a mask
///
/// Deterministic two-pass algorithm: the first pass assigns provisional
/// labels and records equivalences in a union-find structure; the second
/// pass resolves each pixel to its root and renumbers roots in the order
/// their components are first encountered in the raster scan.
///
/// # Examples
///
/// ```
/// use autoslicer_core::Mask;
/// use autoslicer_region::{Connectivity, label_components};
///
/// let mut mask = Mask::new(10, 10);
/// mask.set(1, 1, true).unwrap();
/// mask.set(2, 1, true).unwrap();
/// mask.set(7, 7, true).unwrap();
///
/// let grid = label_components(&mask, Connectivity::FourWay);
/// assert_eq!(grid.count(), 2);
/// assert_eq!(grid.label(1, 1), Some(1));
/// assert_eq!(grid.label(7, 7), Some(2));
/// ```
pub fn label_components(mask: &Mask, connectivity: Connectivity) -> LabelGrid {
    let (width, height) = mask.dimensions();
    let n = width as usize * height as usize;
    let mut provisional = vec![0u32; n];
    let mut uf = UnionFind::new();

    // Pass 1: provisional labels from already-scanned neighbors
    for y in 0..height {
        for x in 0..width {
            if !mask.get_unchecked(x, y) {
                continue;
            }
            let idx = y as usize * width as usize + x as usize;

            let mut neighbors = [0u32; 4];
            let mut found = 0usize;
            if x > 0 && mask.get_unchecked(x - 1, y) {
                neighbors[found] = provisional[idx - 1];
                found += 1;
            }
            if y > 0 {
                let up = idx - width as usize;
                if mask.get_unchecked(x, y - 1) {
                    neighbors[found] = provisional[up];
                    found += 1;
                }
                if connectivity == Connectivity::EightWay {
                    if x > 0 && mask.get_unchecked(x - 1, y - 1) {
                        neighbors[found] = provisional[up - 1];
                        found += 1;
                    }
                    if x + 1 < width && mask.get_unchecked(x + 1, y - 1) {
                        neighbors[found] = provisional[up + 1];
                        found += 1;
                    }
                }
            }

            if found == 0 {
                provisional[idx] = uf.make_set();
            } else {
                let first = neighbors[0];
                for &other in &neighbors[1..found] {
                    uf.union(first, other);
                }
                provisional[idx] = first;
            }
        }
    }

    // Pass 2: resolve roots and renumber in discovery order
    let mut root_to_final = vec![0u32; uf.parent.len()];
    let mut labels = vec![0u32; n];
    let mut count = 0u32;
    for (idx, &p) in provisional.iter().enumerate() {
        if p == 0 {
            continue;
        }
        let root = uf.find(p) as usize;
        if root_to_final[root] == 0 {
            count += 1;
            root_to_final[root] = count;
        }
        labels[idx] = root_to_final[root];
    }

    LabelGrid {
        width,
        height,
        labels,
        count,
    }
}

/// Compute the minimal bounding box of each component
///
/// Index `i` of the result holds the box for label `i + 1`. The boxes
/// are unpadded: exactly the extent of the labeled pixels.
pub fn component_bounds(grid: &LabelGrid) -> Vec<BBox> {
    // (min_x, min_y, max_x, max_y), inclusive; every label has at least
    // one pixel so the sentinels are always overwritten
    let mut extents = vec![(u32::MAX, u32::MAX, 0u32, 0u32); grid.count() as usize];

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let label = grid.label_unchecked(x, y);
            if label == 0 {
                continue;
            }
            let e = &mut extents[(label - 1) as usize];
            e.0 = e.0.min(x);
            e.1 = e.1.min(y);
            e.2 = e.2.max(x);
            e.3 = e.3.max(y);
        }
    }

    extents
        .into_iter()
        .map(|(x0, y0, x1, y1)| BBox::new_unchecked(x0, y0, x1 + 1, y1 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a mask from a string picture: '#' = foreground
    fn mask_from_rows(rows: &[&str]) -> Mask {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut mask = Mask::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    mask.set(x as u32, y as u32, true).unwrap();
                }
            }
        }
        mask
    }

    #[test]
    fn test_empty_mask() {
        let grid = label_components(&Mask::new(10, 10), Connectivity::FourWay);
        assert_eq!(grid.count(), 0);
        assert!(grid.labels().iter().all(|&l| l == 0));
        assert!(component_bounds(&grid).is_empty());
    }

    #[test]
    fn test_zero_area_mask() {
        let grid = label_components(&Mask::new(0, 5), Connectivity::FourWay);
        assert_eq!(grid.count(), 0);
        assert_eq!(grid.label(0, 0), None);
    }

    #[test]
    fn test_single_component() {
        let mask = mask_from_rows(&[
            "....",
            ".##.",
            ".##.",
            "....",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        assert_eq!(grid.count(), 1);
        assert_eq!(grid.label(1, 1), Some(1));
        assert_eq!(grid.label(2, 2), Some(1));
        assert_eq!(grid.label(0, 0), Some(0));

        let bounds = component_bounds(&grid);
        assert_eq!(bounds, vec![BBox::new(1, 1, 3, 3).unwrap()]);
    }

    #[test]
    fn test_diagonal_touch_four_way() {
        // Two blocks touching only at a corner
        let mask = mask_from_rows(&[
            "##....",
            "##....",
            "..##..",
            "..##..",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        assert_eq!(grid.count(), 2);
        assert_ne!(grid.label(1, 1), grid.label(2, 2));
    }

    #[test]
    fn test_diagonal_touch_eight_way() {
        let mask = mask_from_rows(&[
            "##....",
            "##....",
            "..##..",
            "..##..",
        ]);
        let grid = label_components(&mask, Connectivity::EightWay);
        assert_eq!(grid.count(), 1);
        assert_eq!(grid.label(1, 1), grid.label(2, 2));
    }

    #[test]
    fn test_discovery_order() {
        // First pixels encountered: (5,0) then (0,2) then (8,3)
        let mask = mask_from_rows(&[
            ".....#....",
            ".....#....",
            "##........",
            "##......#.",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        assert_eq!(grid.count(), 3);
        assert_eq!(grid.label(5, 0), Some(1));
        assert_eq!(grid.label(0, 2), Some(2));
        assert_eq!(grid.label(8, 3), Some(3));
    }

    #[test]
    fn test_u_shape_merges() {
        // The two arms get distinct provisional labels that must be
        // merged when the bottom row joins them
        let mask = mask_from_rows(&[
            "#.#",
            "#.#",
            "###",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        assert_eq!(grid.count(), 1);
        assert_eq!(grid.label(0, 0), Some(1));
        assert_eq!(grid.label(2, 0), Some(1));
        assert_eq!(grid.label(1, 2), Some(1));
    }

    #[test]
    fn test_labels_are_contiguous() {
        let mask = mask_from_rows(&[
            "#.#.#",
            ".....",
            "#.#.#",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        assert_eq!(grid.count(), 6);
        let mut seen: Vec<u32> = grid.labels().iter().copied().filter(|&l| l != 0).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, (1..=6).collect::<Vec<u32>>());
    }

    #[test]
    fn test_every_foreground_pixel_labeled_once() {
        let mask = mask_from_rows(&[
            "##..##",
            "##..##",
            "......",
            "..##..",
        ]);
        let grid = label_components(&mask, Connectivity::FourWay);
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let label = grid.label(x, y).unwrap();
                if mask.get(x, y).unwrap() {
                    assert!(label >= 1 && label <= grid.count());
                } else {
                    assert_eq!(label, 0);
                }
            }
        }
    }

    #[test]
    fn test_labeling_is_deterministic() {
        let mask = mask_from_rows(&[
            "#.##.#",
            "##.###",
            ".#.#..",
        ]);
        let a = label_components(&mask, Connectivity::FourWay);
        let b = label_components(&mask, Connectivity::FourWay);
        assert_eq!(a, b);
    }
}
