//! Built-in themed word lists
//!
//! Each list is an ordered set of 5-letter uppercase entries. Order matters:
//! the daily selector indexes into the list, so reordering changes which
//! word a date maps to.

/// MLB player names (5-letter surnames and close variants)
pub const MLB: &[&str] = &[
    "JUDGE", "BETTS", "FREEM", "ALTUV", "GALLO", "WANDO", "TROUT", "ALONS", "MARTE", "HAYES",
    "PAULS", "WRIGH", "MULLI", "GORDO", "LINDO", "MUNOZ", "BRYCE", "STANT", "MACHA", "BELLI",
    "NOLAN", "TATIS", "ACUNA", "ALVAE", "GUERR", "ROBER", "COLES", "MARIS", "SMITH", "YOUNG",
    "WALKR", "LEWIS", "CLARK", "COXAN", "ELLIS", "EVANS", "POPEZ", "PEREZ", "MORRI", "DAVIS",
];

/// General sports vocabulary
pub const SPORTS: &[&str] = &[
    "DERBY", "RUGBY", "SKATE", "TRACK", "VAULT", "LUNGE", "SERVE", "SMASH", "PITCH", "CATCH",
    "THROW", "FIELD", "COURT", "GREEN", "MEDAL", "TITLE", "RALLY", "SCULL", "KAYAK", "CYCLE",
    "DIVER", "ROWER", "BOXER", "RACER",
];

/// Foods
pub const FOODS: &[&str] = &[
    "APPLE", "BAGEL", "BREAD", "CANDY", "CREPE", "CURRY", "DONUT", "GRAPE", "GRAVY", "HONEY",
    "KEBAB", "LEMON", "MANGO", "MELON", "OLIVE", "ONION", "PASTA", "PEACH", "PIZZA", "SALSA",
    "STEAK", "SUSHI", "TACOS", "TOAST",
];

/// Animals
pub const ANIMALS: &[&str] = &[
    "BISON", "CAMEL", "DINGO", "EAGLE", "GECKO", "HIPPO", "HORSE", "HYENA", "KOALA", "LEMUR",
    "LLAMA", "MOOSE", "MOUSE", "OTTER", "PANDA", "RHINO", "ROBIN", "SHARK", "SHEEP", "SKUNK",
    "SLOTH", "SNAKE", "TIGER", "ZEBRA",
];
