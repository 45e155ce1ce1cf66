// Constants

// Crystallographic restriction: the only rotation orders compatible with a lattice
pub const CRYSTALLOGRAPHIC_ORDERS: [u32; 5] = [1, 2, 3, 4, 6];

// Centering letters per dimension (stored upper case)
pub const CENTERINGS_1D: &[char] = &['P'];
pub const CENTERINGS_2D: &[char] = &['P', 'C'];
pub const CENTERINGS_3D: &[char] = &['P', 'A', 'B', 'C', 'I', 'F', 'R', 'H'];

// Distance between an ASCII digit and its Unicode subscript ('0' = U+0030, '₀' = U+2080)
pub const SUBSCRIPT_OFFSET: u32 = 0x2080 - 0x30;
