// Canonical Hermann-Mauguin symbols, indexed by group number (entry 0 is group 1).
//
// Space group entries are the full ITA symbols written exactly as the long form
// renders them: R-centered trigonal groups omit their identity direction, cubic
// groups with two symmetry directions keep a trailing identity.

/// The two line groups (1D).
pub static LINE_GROUP_SYMBOLS: [&str; 2] = ["P 1", "P m"];

/// The 17 plane groups (2D).
pub static PLANE_GROUP_SYMBOLS: [&str; 17] = [
    "p 1", "p 2", "p 1 m 1", "p 1 g 1", "c 1 m 1", "p 2 m m", "p 2 m g", "p 2 g g", "c 2 m m",
    "p 4", "p 4 m m", "p 4 g m", "p 3", "p 3 m 1", "p 3 1 m", "p 6", "p 6 m m",
];

/// The 230 space groups (3D).
pub static SPACE_GROUP_SYMBOLS: [&str; 230] = [
    // ======================== TRICLINIC (1-2) ========================
    "P 1", "P -1",
    // ======================== MONOCLINIC (3-15) ========================
    "P 1 2 1", "P 1 2₁ 1", "C 1 2 1", "P 1 m 1", "P 1 c 1", "C 1 m 1", "C 1 c 1", "P 1 2/m 1",
    "P 1 2₁/m 1", "C 1 2/m 1", "P 1 2/c 1", "P 1 2₁/c 1", "C 1 2/c 1",
    // ======================== ORTHORHOMBIC (16-74) ========================
    "P 2 2 2", "P 2 2 2₁", "P 2₁ 2₁ 2", "P 2₁ 2₁ 2₁", "C 2 2 2₁", "C 2 2 2", "F 2 2 2",
    "I 2 2 2", "I 2₁ 2₁ 2₁", "P m m 2", "P m c 2₁", "P c c 2", "P m a 2", "P c a 2₁", "P n c 2",
    "P m n 2₁", "P b a 2", "P n a 2₁", "P n n 2", "C m m 2", "C m c 2₁", "C c c 2", "A m m 2",
    "A e m 2", "A m a 2", "A e a 2", "F m m 2", "F d d 2", "I m m 2", "I b a 2", "I m a 2",
    "P 2/m 2/m 2/m", "P 2/n 2/n 2/n", "P 2/c 2/c 2/m", "P 2/b 2/a 2/n", "P 2₁/m 2/m 2/a",
    "P 2/n 2₁/n 2/a", "P 2/m 2/n 2₁/a", "P 2₁/c 2/c 2/a", "P 2₁/b 2₁/a 2/m", "P 2₁/c 2₁/c 2/n",
    "P 2/b 2₁/c 2₁/m", "P 2₁/n 2₁/n 2/m", "P 2₁/m 2₁/m 2/n", "P 2₁/b 2/c 2₁/n",
    "P 2₁/b 2₁/c 2₁/a", "P 2₁/n 2₁/m 2₁/a", "C 2/m 2/c 2₁/m", "C 2/m 2/c 2₁/e", "C 2/m 2/m 2/m",
    "C 2/c 2/c 2/m", "C 2/m 2/m 2/e", "C 2/c 2/c 2/e", "F 2/m 2/m 2/m", "F 2/d 2/d 2/d",
    "I 2/m 2/m 2/m", "I 2/b 2/a 2/m", "I 2₁/b 2₁/c 2₁/a", "I 2₁/m 2₁/m 2₁/a",
    // ======================== TETRAGONAL (75-142) ========================
    "P 4 1 1", "P 4₁ 1 1", "P 4₂ 1 1", "P 4₃ 1 1", "I 4 1 1", "I 4₁ 1 1", "P -4 1 1",
    "I -4 1 1", "P 4/m 1 1", "P 4₂/m 1 1", "P 4/n 1 1", "P 4₂/n 1 1", "I 4/m 1 1", "I 4₁/a 1 1",
    "P 4 2 2", "P 4 2₁ 2", "P 4₁ 2 2", "P 4₁ 2₁ 2", "P 4₂ 2 2", "P 4₂ 2₁ 2", "P 4₃ 2 2",
    "P 4₃ 2₁ 2", "I 4 2 2", "I 4₁ 2 2", "P 4 m m", "P 4 b m", "P 4₂ c m", "P 4₂ n m", "P 4 c c",
    "P 4 n c", "P 4₂ m c", "P 4₂ b c", "I 4 m m", "I 4 c m", "I 4₁ m d", "I 4₁ c d", "P -4 2 m",
    "P -4 2 c", "P -4 2₁ m", "P -4 2₁ c", "P -4 m 2", "P -4 c 2", "P -4 b 2", "P -4 n 2",
    "I -4 m 2", "I -4 c 2", "I -4 2 m", "I -4 2 d", "P 4/m 2/m 2/m", "P 4/m 2/c 2/c",
    "P 4/n 2/b 2/m", "P 4/n 2/n 2/c", "P 4/m 2₁/b 2/m", "P 4/m 2₁/n 2/c", "P 4/n 2₁/m 2/m",
    "P 4/n 2₁/c 2/c", "P 4₂/m 2/m 2/c", "P 4₂/m 2/c 2/m", "P 4₂/n 2/b 2/c", "P 4₂/n 2/n 2/m",
    "P 4₂/m 2₁/b 2/c", "P 4₂/m 2₁/n 2/m", "P 4₂/n 2₁/m 2/c", "P 4₂/n 2₁/c 2/m", "I 4/m 2/m 2/m",
    "I 4/m 2/c 2/m", "I 4₁/a 2/m 2/d", "I 4₁/a 2/c 2/d",
    // ======================== TRIGONAL (143-167) ========================
    "P 3 1 1", "P 3₁ 1 1", "P 3₂ 1 1", "R 3 1 1", "P -3 1 1", "R -3 1 1", "P 3 1 2", "P 3 2 1",
    "P 3₁ 1 2", "P 3₁ 2 1", "P 3₂ 1 2", "P 3₂ 2 1", "R 3 2", "P 3 m 1", "P 3 1 m", "P 3 c 1",
    "P 3 1 c", "R 3 m", "R 3 c", "P -3 1 2/m", "P -3 1 2/c", "P -3 2/m 1", "P -3 2/c 1",
    "R -3 2/m", "R -3 2/c",
    // ======================== HEXAGONAL (168-194) ========================
    "P 6 1 1", "P 6₁ 1 1", "P 6₅ 1 1", "P 6₂ 1 1", "P 6₄ 1 1", "P 6₃ 1 1", "P -6 1 1",
    "P 6/m 1 1", "P 6₃/m 1 1", "P 6 2 2", "P 6₁ 2 2", "P 6₅ 2 2", "P 6₂ 2 2", "P 6₄ 2 2",
    "P 6₃ 2 2", "P 6 m m", "P 6 c c", "P 6₃ c m", "P 6₃ m c", "P -6 m 2", "P -6 c 2",
    "P -6 2 m", "P -6 2 c", "P 6/m 2/m 2/m", "P 6/m 2/c 2/c", "P 6₃/m 2/c 2/m",
    "P 6₃/m 2/m 2/c",
    // ======================== CUBIC (195-230) ========================
    "P 2 3 1", "F 2 3 1", "I 2 3 1", "P 2₁ 3 1", "I 2₁ 3 1", "P 2/m -3 1", "P 2/n -3 1",
    "F 2/m -3 1", "F 2/d -3 1", "I 2/m -3 1", "P 2₁/a -3 1", "I 2₁/a -3 1", "P 4 3 2",
    "P 4₂ 3 2", "F 4 3 2", "F 4₁ 3 2", "I 4 3 2", "P 4₃ 3 2", "P 4₁ 3 2", "I 4₁ 3 2",
    "P -4 3 m", "F -4 3 m", "I -4 3 m", "P -4 3 n", "F -4 3 c", "I -4 3 d", "P 4/m -3 2/m",
    "P 4/n -3 2/n", "P 4₂/m -3 2/n", "P 4₂/n -3 2/m", "F 4/m -3 2/m", "F 4/m -3 2/c",
    "F 4₁/d -3 2/m", "F 4₁/d -3 2/c", "I 4/m -3 2/m", "I 4₁/a -3 2/d",
];
