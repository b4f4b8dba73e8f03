//! Region extraction regression test
//!
//! Exercises outer-border extraction and area filtering together on
//! synthetic binary images.
//!
//! Run with:
//! ```
//! cargo test -p ocrus-region --test region_reg
//! ```

use ocrus_core::{Pix, PixMut, PixelDepth};
use ocrus_region::{filter_by_min_area, find_outer_regions, sort_left_to_right};

fn fill_rect(pm: &mut PixMut, x: u32, y: u32, w: u32, h: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            pm.set_pixel(xx, yy, 255).unwrap();
        }
    }
}

#[test]
fn three_blobs_min_area_filter() {
    // Two 500-pixel squares and one 50-pixel speck; with min_area = 100
    // exactly the two large blobs must survive.
    let pix = Pix::new(120, 60, PixelDepth::Bit8).unwrap();
    let mut pm = pix.try_into_mut().unwrap();
    fill_rect(&mut pm, 5, 10, 25, 20); // 500 px
    fill_rect(&mut pm, 50, 10, 25, 20); // 500 px
    fill_rect(&mut pm, 95, 20, 10, 5); // 50 px
    let pix: Pix = pm.into();

    let regions = find_outer_regions(&pix).unwrap();
    assert_eq!(regions.len(), 3);

    let kept = filter_by_min_area(regions, 100);
    assert_eq!(kept.len(), 2);
    for r in &kept {
        assert_eq!(r.area, 500);
        assert!(r.area >= 100);
    }
}

#[test]
fn filter_output_is_subset_with_monotone_areas() {
    let pix = Pix::new(100, 40, PixelDepth::Bit8).unwrap();
    let mut pm = pix.try_into_mut().unwrap();
    fill_rect(&mut pm, 2, 2, 3, 3); // 9 px
    fill_rect(&mut pm, 20, 5, 12, 12); // 144 px
    fill_rect(&mut pm, 50, 5, 9, 11); // 99 px
    fill_rect(&mut pm, 75, 5, 10, 10); // 100 px
    let pix: Pix = pm.into();

    let all = find_outer_regions(&pix).unwrap();
    let kept = filter_by_min_area(all.clone(), 100);

    // Subset relation: every kept region appears in the full extraction
    for r in &kept {
        assert!(all.iter().any(|a| a.bounds == r.bounds && a.area == r.area));
    }
    // Every retained area >= threshold, every dropped area < threshold
    assert!(kept.iter().all(|r| r.area >= 100));
    let dropped: Vec<_> = all
        .iter()
        .filter(|a| !kept.iter().any(|k| k.bounds == a.bounds))
        .collect();
    assert_eq!(dropped.len(), 2);
    assert!(dropped.iter().all(|r| r.area < 100));
}

#[test]
fn sorted_regions_read_left_to_right() {
    let pix = Pix::new(100, 30, PixelDepth::Bit8).unwrap();
    let mut pm = pix.try_into_mut().unwrap();
    // Deliberately placed so that raster-scan discovery order differs
    // from reading order
    fill_rect(&mut pm, 60, 2, 8, 8);
    fill_rect(&mut pm, 10, 12, 8, 8);
    fill_rect(&mut pm, 35, 20, 8, 8);
    let pix: Pix = pm.into();

    let mut regions = find_outer_regions(&pix).unwrap();
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[0].bounds.x, 60); // discovery order is top-down

    sort_left_to_right(&mut regions);
    let xs: Vec<i32> = regions.iter().map(|r| r.bounds.x).collect();
    assert_eq!(xs, vec![10, 35, 60]);
}

#[test]
fn repeated_extraction_is_identical() {
    let pix = Pix::new(80, 80, PixelDepth::Bit8).unwrap();
    let mut pm = pix.try_into_mut().unwrap();
    fill_rect(&mut pm, 5, 5, 20, 30);
    fill_rect(&mut pm, 40, 40, 15, 15);
    fill_rect(&mut pm, 70, 2, 4, 4);
    let pix: Pix = pm.into();

    let first = find_outer_regions(&pix).unwrap();
    for _ in 0..3 {
        let again = find_outer_regions(&pix).unwrap();
        assert_eq!(again.len(), first.len());
        for (a, b) in first.iter().zip(again.iter()) {
            assert_eq!(a.bounds, b.bounds);
            assert_eq!(a.area, b.area);
            assert_eq!(a.boundary, b.boundary);
        }
    }
}
