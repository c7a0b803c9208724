//! Walk through the reference triangle in the elliptic and hyperbolic
//! planes: dual trilateral, altitudes, orthocenter, and exact measures.
//!
//! Run with: cargo run -p projgeom --example reference_triangle

use projgeom::cayley_klein::{orthocenter, tri_altitude, CayleyKlein};
use projgeom::measure::{check_tqf, tri_quadrance};
use projgeom::plane::{tri_dual, HomogeneousPlane, ProjectivePlane};
use projgeom::{elliptic, hyperbolic};

fn main() {
    let tri = [
        elliptic::Point::new([1i64, 3, 1]),
        elliptic::Point::new([4, 2, 1]),
        elliptic::Point::new([1, 1, -1]),
    ];
    let [l1, l2, l3] = tri_dual(&tri);
    println!("elliptic trilateral:");
    println!("  l1 = {:?}", l1.coord);
    println!("  l2 = {:?}", l2.coord);
    println!("  l3 = {:?}", l3.coord);

    let o = orthocenter(&tri);
    let [t1, t2, t3] = tri_altitude(&tri);
    println!("orthocenter = {:?}", o.coord);
    println!(
        "on all three altitudes: {}",
        t1.incident(&o) && t2.incident(&o) && t3.incident(&o)
    );
    println!("perp(perp(l1)) == l1: {}", l1.perp().perp() == l1);

    // a collinear triple has a vanishing triple quad residue
    let h1 = hyperbolic::Point::new([1i64, 3, 1]);
    let h2 = hyperbolic::Point::new([4, 2, 1]);
    let h4 = hyperbolic::Point::plucker(&2, &h1, &3, &h2);
    let q = tri_quadrance(&[h1, h2, h4]);
    println!("hyperbolic TQF residue on a collinear triple = {:?}", check_tqf(&q));
}
