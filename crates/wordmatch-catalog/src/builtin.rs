pub(crate) const BUILTIN_WORDS: &[(&str, [&str; 5])] = &[
    ("fruit", ["apple", "banana", "orange", "grape", "kiwi"]),
    ("vegetable", ["carrot", "broccoli", "spinach", "pepper", "onion"]),
    ("meat", ["chicken", "beef", "pork", "lamb", "bacon"]),
    ("fish", ["salmon", "tuna", "cod", "trout", "sardine"]),
    ("drink", ["water", "juice", "tea", "coffee", "milk"]),
    ("animal", ["cat", "dog", "elephant", "lion", "tiger"]),
    ("color", ["red", "blue", "green", "yellow", "purple"]),
    ("vehicle", ["car", "bike", "bus", "train", "airplane"]),
    ("clothing", ["shirt", "pants", "hat", "shoes", "coat"]),
    ("tool", ["hammer", "wrench", "saw", "screwdriver", "drill"]),
    ("sport", ["soccer", "tennis", "baseball", "basketball", "hockey"]),
    ("country", ["USA", "Canada", "France", "Japan", "Brazil"]),
    ("shape", ["circle", "square", "triangle", "rectangle", "hexagon"]),
];
