#![feature(test)]

extern crate test;

use lifegrid::cells::Cartesian2DCoordinate;
use lifegrid::grid::Grid;
use lifegrid::units::{Height, Width};
use test::Bencher;


#[bench]
fn bench_grid_11(b: &mut Bencher) {

    b.iter(|| Grid::new(Width(11), Height(11)).unwrap());
}

#[bench]
fn bench_grid_128(b: &mut Bencher) {

    b.iter(|| Grid::new(Width(128), Height(128)).unwrap());
}

#[bench]
fn bench_grid_500(b: &mut Bencher) {

    b.iter(|| Grid::new(Width(500), Height(500)).unwrap());
}

#[bench]
fn bench_resize_128_to_129(b: &mut Bencher) {
    let mut g = Grid::new(Width(128), Height(128)).unwrap();
    let mut toggle = false;

    b.iter(|| {
        toggle = !toggle;
        let side = if toggle { 129 } else { 128 };
        g.resize(Width(side), Height(side)).unwrap()
    });
}

#[bench]
fn bench_index_to_gridcoordinate(b: &mut Bencher) {

    b.iter(|| Cartesian2DCoordinate::from_row_major_index(93, Width(11)));
}

#[bench]
fn bench_cell_at_middle_of_grid(b: &mut Bencher) {
    let g = Grid::new(Width(11), Height(11)).unwrap();
    let mid = Cartesian2DCoordinate::new(5, 5);
    b.iter(|| g.cell_at(mid).map(|cell| cell.neighbours().len()).unwrap());
}
