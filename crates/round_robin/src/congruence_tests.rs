use super::*;

#[test]
fn test_equal_numbers_are_congruent() {
    assert!(is_congruent_modulo(5, 5, 3));
    assert!(is_congruent_modulo(0, 0, 1));
}

#[test]
fn test_same_remainder_is_congruent() {
    assert!(is_congruent_modulo(10, 4, 3));
    assert!(is_congruent_modulo(4, 10, 3));
    assert!(!is_congruent_modulo(10, 5, 3));
}

#[test]
fn test_not_the_remainder_equals_operand_shortcut() {
    // 6 % 3 == 0 but the round number is 3: the shortcut `6 % 3 == 3` fails
    assert!(is_congruent_modulo(6, 3, 3));
    assert_ne!(6 % 3, 3);

    // 16 % 7 == 2, not 9
    assert!(is_congruent_modulo(16, 9, 7));
    assert_ne!(16 % 7, 9);
}

#[test]
fn test_modulus_one_makes_everything_congruent() {
    for a in 0..10 {
        for b in 0..10 {
            assert!(is_congruent_modulo(a, b, 1));
        }
    }
}

#[test]
fn test_large_operands() {
    let m = u64::from(u32::MAX);
    assert!(is_congruent_modulo(2 * m + 1, 1, m));
}
