use loret_fec_link::GfTable;

#[test]
fn identity_and_zero_elements() {
    let gf = GfTable::new();
    for a in 0u32..=255 {
        let a = a as u8;
        assert_eq!(gf.mul(a, 1), a);
        assert_eq!(gf.mul(a, 0), 0);
    }
}

#[test]
fn mul_div_are_inverse_across_full_range() {
    let gf = GfTable::new();
    for a in 1u32..=255 {
        for b in 1u32..=255 {
            let (a, b) = (a as u8, b as u8);
            assert_eq!(gf.div(gf.mul(a, b), a), b);
        }
    }
}

#[test]
fn exp_at_normalises_negative_and_large_indices() {
    let gf = GfTable::new();
    assert_eq!(gf.exp_at(0), gf.exp_at(255));
    assert_eq!(gf.exp_at(-1), gf.exp_at(254));
    assert_eq!(gf.exp_at(510), gf.exp_at(0));
}
