pub const SHUFFLE_ORDER_SALT: u32 = 0xC0DE;
pub const SHUFFLE_ATTEMPT_SALT: u32 = 0x9E37_79B9;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn scramble_seed(base: u32, nonce: u32, grid_size: usize) -> u32 {
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ (grid_size as u32) ^ 0x5CA7_7EED
}

pub fn shuffle_order(seed: u32, total: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..total).collect();
    for i in (1..order.len()).rev() {
        let salt = SHUFFLE_ORDER_SALT + i as u32;
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        order.swap(i, j);
    }
    order
}

// The blank carries the highest index and is left out on both sides of
// every pair, per the 15-puzzle parity theorem.
pub fn count_inversions(order: &[usize]) -> usize {
    let blank = order.len().saturating_sub(1);
    let mut inversions = 0;
    for i in 0..order.len() {
        if order[i] == blank {
            continue;
        }
        for j in i + 1..order.len() {
            if order[j] == blank {
                continue;
            }
            if order[i] > order[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

pub fn is_solvable(order: &[usize], empty_slot: usize, grid_size: usize) -> bool {
    if grid_size == 0 || empty_slot >= order.len() {
        return false;
    }
    let inversions = count_inversions(order);
    let empty_row_from_bottom = grid_size - empty_slot / grid_size;
    if grid_size % 2 == 0 {
        if empty_row_from_bottom % 2 == 0 {
            inversions % 2 == 1
        } else {
            inversions % 2 == 0
        }
    } else {
        inversions % 2 == 0
    }
}

// Rejection sampling: about half of all permutations pass, so the loop
// terminates after ~2 attempts in expectation.
pub fn solvable_order(seed: u32, grid_size: usize) -> (Vec<usize>, usize) {
    let total = grid_size * grid_size;
    let blank = total.saturating_sub(1);
    let mut attempt = 0u32;
    loop {
        let attempt_seed = splitmix32(seed ^ attempt.wrapping_mul(SHUFFLE_ATTEMPT_SALT));
        let order = shuffle_order(attempt_seed, total);
        let empty_slot = order
            .iter()
            .position(|&home| home == blank)
            .unwrap_or(blank);
        if is_solvable(&order, empty_slot, grid_size) {
            return (order, empty_slot);
        }
        attempt = attempt.wrapping_add(1);
    }
}
