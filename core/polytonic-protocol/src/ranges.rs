/// An inclusive range of code points. The bounds may be given in either order.
pub type NumberRange = (u32, u32);

pub const GREEK_AND_COPTIC: NumberRange = (0x0370, 0x03FF);
pub const GREEK_EXTENDED: NumberRange = (0x1F00, 0x1FFF);
pub const COMBINING_DIACRITICALS: NumberRange = (0x0300, 0x036F);
pub const ASCII_CONTROL: NumberRange = (0x0000, 0x001F);
pub const ASCII_PUNCTUATION_1: NumberRange = (0x0020, 0x002F);
pub const ASCII_PUNCTUATION_2: NumberRange = (0x003A, 0x0040);
pub const ASCII_PUNCTUATION_3: NumberRange = (0x005B, 0x0060);
pub const ASCII_PUNCTUATION_4: NumberRange = (0x007B, 0x007B);
pub const ASCII_DIGITS: NumberRange = (0x0030, 0x0039);
pub const GENERAL_PUNCTUATION: NumberRange = (0x2000, 0x206F);
pub const SUPPLEMENTAL_PUNCTUATION: NumberRange = (0x2E00, 0x2E7F);

/// Code point ranges a precomposed Greek text may draw from.
pub const PRECOMPOSED_GREEK_ALLOWED: &[NumberRange] = &[
    GREEK_AND_COPTIC,
    GREEK_EXTENDED,
    ASCII_CONTROL,
    ASCII_DIGITS,
    ASCII_PUNCTUATION_1,
    ASCII_PUNCTUATION_2,
    ASCII_PUNCTUATION_3,
    ASCII_PUNCTUATION_4,
    GENERAL_PUNCTUATION,
    SUPPLEMENTAL_PUNCTUATION,
];
