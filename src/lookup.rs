//! Rounded-up integer square root, table-backed for the small squared
//! distances that dominate neighbor enumeration and field relaxation.

const TABLE_SIZE: usize = 256;

const fn build_table() -> [u8; TABLE_SIZE] {
    let mut table = [0u8; TABLE_SIZE];
    let mut i = 1;
    while i < TABLE_SIZE {
        let mut r = 1u32;
        while r * r < i as u32 {
            r += 1;
        }
        table[i] = r as u8;
        i += 1;
    }
    table
}

static CEIL_SQRT: [u8; TABLE_SIZE] = build_table();

/// `ceil(sqrt(squared))` for non-negative inputs. Values beyond the table
/// fall back to a scan upward from the table maximum.
pub(crate) fn ceil_sqrt(squared: i32) -> i32 {
    debug_assert!(squared >= 0);
    if (squared as usize) < TABLE_SIZE {
        CEIL_SQRT[squared as usize] as i32
    } else {
        let mut r = 16;
        while r * r < squared {
            r += 1;
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_squares() {
        for r in 0..40 {
            assert_eq!(ceil_sqrt(r * r), r);
        }
    }

    #[test]
    fn rounds_up() {
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(8), 3);
        assert_eq!(ceil_sqrt(99), 10);
        assert_eq!(ceil_sqrt(101), 11);
        assert_eq!(ceil_sqrt(200), 15);
    }

    #[test]
    fn beyond_table() {
        assert_eq!(ceil_sqrt(255), 16);
        assert_eq!(ceil_sqrt(256), 16);
        assert_eq!(ceil_sqrt(257), 17);
        assert_eq!(ceil_sqrt(1000), 32);
    }
}
