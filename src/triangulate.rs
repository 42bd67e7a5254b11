//! Constrained / Delaunay triangulation over the integer point model.
//!
//! Given a set of closed paths (an outer boundary plus any holes and
//! islands nested inside it), `triangulate` partitions each resulting
//! solid region into triangles whose union exactly covers the input
//! area. It shares the numerics kernel with the rest of the crate but
//! has no dependency on the sweep engine's output chain: nesting is
//! resolved by point-in-polygon containment, holes are stitched into
//! their outer boundary by bridging, and the merged boundary is cut
//! into triangles by ear-clipping. When `use_delaunay` is set, interior
//! edges are flipped until every triangle pair satisfies the empty
//! circumcircle property.

use std::collections::HashMap;

use crate::core::{
    area, cross_product_sign, distance_sqr, get_segment_intersect_pt, is_positive,
    point_in_polygon, segments_intersect, strip_duplicates_path, Path64, Paths64, Point64,
    PointInPolygonResult,
};

/// Outcome of a [`triangulate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulateResult {
    /// Triangulation completed; the returned `Paths64` holds one 3-point
    /// path per triangle.
    Success,
    /// An internal invariant was not reached (e.g. no ear could be found
    /// on a non-degenerate boundary); the returned paths are empty.
    Fail,
    /// The input had no surviving polygon with at least 3 distinct
    /// vertices.
    NoPolygons,
    /// Two non-adjacent edges of the input genuinely cross (beyond the
    /// 1-unit rounding-error tolerance); the returned paths are empty.
    PathsIntersect,
}

/// Whether `probe_path` lies inside `container`, deciding from the first
/// vertex of `probe_path` that gives a non-boundary answer against
/// `container` rather than trusting a single vertex. Shared vertices between
/// a ring and the container it nests inside (keyhole-style inputs) can put
/// vertex 0 exactly `IsOn` the container's boundary, which would otherwise
/// silently misclassify the nesting.
fn path_is_inside(probe_path: &Path64, container: &Path64) -> bool {
    for &pt in probe_path {
        match point_in_polygon(pt, container) {
            PointInPolygonResult::IsInside => return true,
            PointInPolygonResult::IsOutside => return false,
            PointInPolygonResult::IsOn => continue,
        }
    }
    false
}

/// Triangulate the closed regions described by `paths`.
///
/// `paths` may mix outer boundaries, holes and islands in any order and
/// any winding; nesting is discovered from containment, not from the
/// caller's winding convention. Each output path has exactly 3 points,
/// wound positively (`core::is_positive`).
pub fn triangulate(paths: &Paths64, use_delaunay: bool) -> (TriangulateResult, Paths64) {
    let mut cleaned: Vec<Path64> = Vec::with_capacity(paths.len());
    for p in paths {
        let mut cand = p.clone();
        strip_duplicates_path(&mut cand, true);
        if cand.len() >= 3 {
            cleaned.push(cand);
        }
    }
    if cleaned.is_empty() {
        return (TriangulateResult::NoPolygons, Paths64::new());
    }

    let n = cleaned.len();
    let abs_areas: Vec<f64> = cleaned.iter().map(|p| area(p).abs()).collect();

    // Immediate container of path i: the smallest-area other path whose
    // boundary contains i. A single probe vertex can land exactly on the
    // candidate's boundary (keyhole-style inputs sharing a vertex with
    // their container), so walk i's vertices until one gives a decisive
    // inside/outside answer instead of trusting vertex 0 alone.
    let mut parent: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let mut best: Option<usize> = None;
        let mut best_area = f64::INFINITY;
        for j in 0..n {
            if i == j {
                continue;
            }
            if path_is_inside(&cleaned[i], &cleaned[j]) && abs_areas[j] < best_area {
                best_area = abs_areas[j];
                best = Some(j);
            }
        }
        parent[i] = best;
    }

    let mut depth = vec![0u32; n];
    for i in 0..n {
        let mut d = 0u32;
        let mut cur = parent[i];
        let mut guard = 0;
        while let Some(p) = cur {
            d += 1;
            cur = parent[p];
            guard += 1;
            if guard > n {
                break;
            }
        }
        depth[i] = d;
    }

    // Normalize winding: outers (even depth) positive, holes (odd depth)
    // negative, independently of the caller's convention.
    let mut normalized: Vec<Path64> = cleaned.clone();
    for i in 0..n {
        let wants_positive = depth[i] % 2 == 0;
        if is_positive(&normalized[i]) != wants_positive {
            normalized[i].reverse();
        }
    }

    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for i in 0..n {
        if depth[i] % 2 == 0 {
            let holes: Vec<usize> = (0..n)
                .filter(|&j| depth[j] % 2 == 1 && parent[j] == Some(i))
                .collect();
            groups.push((i, holes));
        }
    }

    let mut triangles: Paths64 = Vec::new();
    for (outer_idx, hole_idxs) in &groups {
        let mut rings: Vec<Path64> = Vec::with_capacity(1 + hole_idxs.len());
        rings.push(normalized[*outer_idx].clone());
        for &h in hole_idxs {
            rings.push(normalized[h].clone());
        }

        if repair_or_reject(&mut rings).is_err() {
            return (TriangulateResult::PathsIntersect, Paths64::new());
        }

        let outer = rings[0].clone();
        let holes = rings[1..].to_vec();

        let boundary = match bridge_holes(&outer, &holes) {
            Some(b) => b,
            None => return (TriangulateResult::Fail, Paths64::new()),
        };

        let group_triangles = match ear_clip(&boundary) {
            Some(t) => t,
            None => return (TriangulateResult::Fail, Paths64::new()),
        };

        let group_triangles = if use_delaunay {
            legalize(group_triangles)
        } else {
            group_triangles
        };

        triangles.extend(group_triangles.into_iter().map(orient_positive));
    }

    (TriangulateResult::Success, triangles)
}

fn same_xy(a: Point64, b: Point64) -> bool {
    a.x == b.x && a.y == b.y
}

fn segment_crosses_ring(a: Point64, b: Point64, ring: &[Point64]) -> bool {
    let n = ring.len();
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        if segments_intersect(a, b, p, q, false) {
            return true;
        }
    }
    false
}

/// Repairs near-miss crossings (within 1 integer unit of both segments'
/// nearer endpoint) by snapping; rejects genuine crossings.
fn repair_or_reject(rings: &mut [Path64]) -> Result<(), ()> {
    let max_passes = rings.iter().map(|r| r.len()).sum::<usize>() * 2 + 8;
    for _ in 0..max_passes {
        let mut edges: Vec<(usize, usize, Point64, Point64)> = Vec::new();
        for (r, ring) in rings.iter().enumerate() {
            let len = ring.len();
            for i in 0..len {
                edges.push((r, i, ring[i], ring[(i + 1) % len]));
            }
        }

        let mut snap: Option<(usize, usize, Point64)> = None;
        'search: for a in 0..edges.len() {
            for b in (a + 1)..edges.len() {
                let (r1, i1, p1, p2) = edges[a];
                let (r2, i2, p3, p4) = edges[b];
                if r1 == r2 {
                    let len = rings[r1].len();
                    if i1 == i2 || (i1 + 1) % len == i2 || (i2 + 1) % len == i1 {
                        continue;
                    }
                }
                if same_xy(p1, p3) || same_xy(p1, p4) || same_xy(p2, p3) || same_xy(p2, p4) {
                    continue;
                }
                if !segments_intersect(p1, p2, p3, p4, false) {
                    continue;
                }
                let mut ip = Point64::new(0, 0);
                if !get_segment_intersect_pt(p1, p2, p3, p4, &mut ip) {
                    return Err(());
                }
                let near1 = distance_sqr(ip, p1).min(distance_sqr(ip, p2));
                let near2 = distance_sqr(ip, p3).min(distance_sqr(ip, p4));
                if near1 <= 1.0 && near2 <= 1.0 {
                    snap = Some((r1, i1, ip));
                    break 'search;
                }
                return Err(());
            }
        }

        match snap {
            None => return Ok(()),
            Some((r, i, ip)) => {
                rings[r][i].x = ip.x;
                rings[r][i].y = ip.y;
            }
        }
    }
    Err(())
}

/// Stitches `holes` into `outer`, returning a single simple boundary walk.
fn bridge_holes(outer: &Path64, holes: &[Path64]) -> Option<Path64> {
    let mut boundary: Path64 = outer.clone();

    let mut order: Vec<usize> = (0..holes.len()).collect();
    order.sort_by(|&a, &b| {
        let xa = holes[a].iter().map(|p| p.x).max().unwrap_or(i64::MIN);
        let xb = holes[b].iter().map(|p| p.x).max().unwrap_or(i64::MIN);
        xb.cmp(&xa)
    });

    for hi in order {
        let hole = &holes[hi];
        let (hv_idx, _) = hole.iter().enumerate().max_by_key(|(_, p)| p.x)?;
        let hv = hole[hv_idx];

        let mut best: Option<(usize, f64)> = None;
        for (m, &cand) in boundary.iter().enumerate() {
            if same_xy(cand, hv) {
                continue;
            }
            if segment_crosses_ring(hv, cand, &boundary) {
                continue;
            }
            if segment_crosses_ring(hv, cand, hole) {
                continue;
            }
            let d = distance_sqr(hv, cand);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((m, d));
            }
        }
        let (m_idx, _) = best?;

        let hole_len = hole.len();
        let mut rotated: Vec<Point64> = Vec::with_capacity(hole_len + 1);
        for k in 0..hole_len {
            rotated.push(hole[(hv_idx + k) % hole_len]);
        }
        rotated.push(hole[hv_idx]);

        let mut spliced: Path64 = Vec::with_capacity(boundary.len() + rotated.len() + 1);
        spliced.extend_from_slice(&boundary[0..=m_idx]);
        spliced.extend_from_slice(&rotated);
        spliced.push(boundary[m_idx]);
        spliced.extend_from_slice(&boundary[m_idx + 1..]);
        boundary = spliced;
    }

    Some(boundary)
}

fn point_in_triangle(p: Point64, a: Point64, b: Point64, c: Point64) -> bool {
    let s1 = cross_product_sign(a, b, p);
    let s2 = cross_product_sign(b, c, p);
    let s3 = cross_product_sign(c, a, p);
    let has_neg = s1 < 0 || s2 < 0 || s3 < 0;
    let has_pos = s1 > 0 || s2 > 0 || s3 > 0;
    !(has_neg && has_pos)
}

/// Ear-clips a simple, positively-wound boundary walk into triangles.
fn ear_clip(boundary: &Path64) -> Option<Paths64> {
    let mut poly = boundary.clone();
    strip_duplicates_path(&mut poly, true);
    if poly.len() < 3 {
        return Some(Paths64::new());
    }
    if !is_positive(&poly) {
        poly.reverse();
    }

    let mut idx: Vec<usize> = (0..poly.len()).collect();
    let mut triangles = Paths64::new();
    let max_guard = idx.len() * idx.len() + 32;
    let mut guard = 0usize;

    while idx.len() > 3 {
        guard += 1;
        if guard > max_guard {
            return None;
        }
        let n = idx.len();
        let mut clipped = false;
        for k in 0..n {
            let ia = idx[(k + n - 1) % n];
            let ib = idx[k];
            let ic = idx[(k + 1) % n];
            let a = poly[ia];
            let b = poly[ib];
            let c = poly[ic];
            if cross_product_sign(a, b, c) <= 0 {
                continue;
            }
            let mut blocked = false;
            for &ij in &idx {
                if ij == ia || ij == ib || ij == ic {
                    continue;
                }
                if point_in_triangle(poly[ij], a, b, c) {
                    blocked = true;
                    break;
                }
            }
            if blocked {
                continue;
            }
            triangles.push(vec![a, b, c]);
            idx.remove(k);
            clipped = true;
            break;
        }
        if !clipped {
            return None;
        }
    }

    if idx.len() == 3 {
        triangles.push(vec![poly[idx[0]], poly[idx[1]], poly[idx[2]]]);
    }
    Some(triangles)
}

fn orient_positive(mut tri: Path64) -> Path64 {
    if !is_positive(&tri) {
        tri.reverse();
    }
    tri
}

fn edge_key(a: Point64, b: Point64) -> ((i64, i64), (i64, i64)) {
    let pa = (a.x, a.y);
    let pb = (b.x, b.y);
    if pa <= pb {
        (pa, pb)
    } else {
        (pb, pa)
    }
}

/// Tests whether `d` lies strictly inside the circumcircle of the
/// positively-wound triangle `(a, b, c)`.
fn in_circle(a: Point64, b: Point64, c: Point64, d: Point64) -> bool {
    let ax = a.x as f64 - d.x as f64;
    let ay = a.y as f64 - d.y as f64;
    let bx = b.x as f64 - d.x as f64;
    let by = b.y as f64 - d.y as f64;
    let cx = c.x as f64 - d.x as f64;
    let cy = c.y as f64 - d.y as f64;
    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let det = ax * (by * c2 - b2 * cy) - ay * (bx * c2 - b2 * cx) + a2 * (bx * cy - by * cx);
    det > 1e-9
}

/// Flips interior edges until every triangle pair is Delaunay-legal (or
/// the flip budget is exhausted, as a guard against a pathological
/// near-cocircular cycle).
fn legalize(mut triangles: Paths64) -> Paths64 {
    let mut edge_map: HashMap<((i64, i64), (i64, i64)), Vec<usize>> = HashMap::new();
    for (ti, tri) in triangles.iter().enumerate() {
        for e in 0..3 {
            let a = tri[e];
            let b = tri[(e + 1) % 3];
            edge_map.entry(edge_key(a, b)).or_default().push(ti);
        }
    }

    let mut queue: Vec<((i64, i64), (i64, i64))> = edge_map.keys().cloned().collect();
    let max_flips = 64 * triangles.len().max(1) + 16;
    let mut flips = 0usize;

    while let Some(key) = queue.pop() {
        if flips >= max_flips {
            break;
        }
        let owners = match edge_map.get(&key) {
            Some(v) if v.len() == 2 => (v[0], v[1]),
            _ => continue,
        };
        let (t1, t2) = owners;
        if t1 == t2 {
            continue;
        }
        let tri1 = triangles[t1].clone();
        let tri2 = triangles[t2].clone();

        let key_p = Point64::new(key.0 .0, key.0 .1);
        let key_q = Point64::new(key.1 .0, key.1 .1);

        let apex1 = tri1
            .iter()
            .copied()
            .find(|v| !same_xy(*v, key_p) && !same_xy(*v, key_q));
        let apex2 = tri2
            .iter()
            .copied()
            .find(|v| !same_xy(*v, key_p) && !same_xy(*v, key_q));
        let (apex1, apex2) = match (apex1, apex2) {
            (Some(a1), Some(a2)) => (a1, a2),
            _ => continue,
        };
        // Use the z-bearing vertex copies from either triangle, not the
        // bare (x, y) reconstructed from the edge key.
        let p = tri1
            .iter()
            .copied()
            .find(|v| same_xy(*v, key_p))
            .unwrap_or(key_p);
        let q = tri1
            .iter()
            .copied()
            .find(|v| same_xy(*v, key_q))
            .unwrap_or(key_q);

        let illegal = in_circle(tri1[0], tri1[1], tri1[2], apex2)
            || in_circle(tri2[0], tri2[1], tri2[2], apex1);
        if !illegal {
            continue;
        }
        if !segments_intersect(p, q, apex1, apex2, false) {
            // Quad isn't convex at this diagonal; flipping would invert a triangle.
            continue;
        }

        let new_tri1 = orient_positive(vec![p, apex1, apex2]);
        let new_tri2 = orient_positive(vec![q, apex1, apex2]);

        for e in 0..3 {
            let a = tri1[e];
            let b = tri1[(e + 1) % 3];
            if let Some(v) = edge_map.get_mut(&edge_key(a, b)) {
                if let Some(pos) = v.iter().position(|&x| x == t1) {
                    v.remove(pos);
                }
            }
        }
        for e in 0..3 {
            let a = tri2[e];
            let b = tri2[(e + 1) % 3];
            if let Some(v) = edge_map.get_mut(&edge_key(a, b)) {
                if let Some(pos) = v.iter().position(|&x| x == t2) {
                    v.remove(pos);
                }
            }
        }

        triangles[t1] = new_tri1.clone();
        triangles[t2] = new_tri2.clone();
        flips += 1;

        for e in 0..3 {
            let a = new_tri1[e];
            let b = new_tri1[(e + 1) % 3];
            let k = edge_key(a, b);
            edge_map.entry(k).or_default().push(t1);
            queue.push(k);
        }
        for e in 0..3 {
            let a = new_tri2[e];
            let b = new_tri2[(e + 1) % 3];
            let k = edge_key(a, b);
            edge_map.entry(k).or_default().push(t2);
            queue.push(k);
        }
    }

    triangles
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "triangulate_tests.rs"]
mod tests;
