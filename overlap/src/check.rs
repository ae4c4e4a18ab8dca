use kata_common::geom::Rect;

/// Sanity check for a computed intersection of `rect1` and `rect2`.
pub fn verify_intersection(rect1: &Rect, rect2: &Rect, result: Option<&Rect>) -> Result<(), String> {
    match result {
        Some(r) => {
            if !rect1.contains_rect(r) || !rect2.contains_rect(r) {
                log::error!("FAIL: intersection {} escapes {} or {}", r, rect1, rect2);
                return Err(format!(
                    "intersection {} is not contained in both {} and {}",
                    r, rect1, rect2
                ));
            }
        }
        None => {
            if rect1.overlaps(rect2) {
                log::error!("FAIL: {} and {} overlap but no intersection was reported", rect1, rect2);
                return Err(format!(
                    "{} and {} share a positive area but no intersection was reported",
                    rect1, rect2
                ));
            }
        }
    }
    log::debug!("Intersection check passed for {} and {}", rect1, rect2);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
        Rect::from_coords(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn accepts_contained_result() {
        let r1 = rect(0.0, 0.0, 4.0, 4.0);
        let r2 = rect(2.0, 2.0, 6.0, 6.0);
        let r3 = rect(2.0, 2.0, 4.0, 4.0);
        assert!(verify_intersection(&r1, &r2, Some(&r3)).is_ok());
    }

    #[test]
    fn rejects_result_outside_inputs() {
        let r1 = rect(0.0, 0.0, 4.0, 4.0);
        let r2 = rect(2.0, 2.0, 6.0, 6.0);
        let bogus = rect(1.0, 1.0, 5.0, 5.0);
        assert!(verify_intersection(&r1, &r2, Some(&bogus)).is_err());
    }

    #[test]
    fn rejects_missing_result() {
        let r1 = rect(0.0, 0.0, 4.0, 4.0);
        let r2 = rect(2.0, 2.0, 6.0, 6.0);
        assert!(verify_intersection(&r1, &r2, None).is_err());
        let touching = rect(4.0, 0.0, 6.0, 4.0);
        assert!(verify_intersection(&r1, &touching, None).is_ok());
    }
}
