use std::fmt::Display;

// Renders a term sequence as an expression string, in the order given.
// The first coefficient keeps its natural sign; subsequent terms are
// joined by " + " / " - " with the magnitude printed after the sign.
// A monomial rendering as "1" is elided, leaving the bare coefficient.
// An empty sequence renders as "0".
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = r.to_string();
        let x = x.to_string();

        let term = if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term);
    } else {
        return "0".to_string()
    }

    for (x, r) in terms {
        let r = r.to_string();
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') {
            ("-", r.to_owned())
        } else {
            ("+", r)
        };

        let term = if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(terms: &[(f64, i32)]) -> String {
        lc(terms.iter().map(|&(r, d)| {
            let x = if d == 0 {
                "1".to_string()
            } else {
                format!("x^{d}")
            };
            (x, r)
        }))
    }

    #[test]
    fn empty() {
        assert_eq!(fmt(&[]), "0");
    }

    #[test]
    fn single_const() {
        assert_eq!(fmt(&[(5.0, 0)]), "5");
        assert_eq!(fmt(&[(-5.0, 0)]), "-5");
    }

    #[test]
    fn descending_terms() {
        assert_eq!(fmt(&[(3.0, 2), (2.0, 1), (5.0, 0)]), "3x^2 + 2x^1 + 5");
    }

    #[test]
    fn negative_terms() {
        assert_eq!(fmt(&[(-3.0, 2), (-5.0, 0)]), "-3x^2 - 5");
        assert_eq!(fmt(&[(3.0, 2), (-5.0, 0)]), "3x^2 - 5");
    }

    #[test]
    fn unit_coeffs() {
        assert_eq!(fmt(&[(1.0, 2), (-1.0, 0)]), "1x^2 - 1");
    }

    #[test]
    fn fractional_coeffs() {
        assert_eq!(fmt(&[(2.5, 1), (0.5, 0)]), "2.5x^1 + 0.5");
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(fmt(&[(4.0, -1)]), "4x^-1");
    }
}
