/// Decodes UTF-8 into code points, skipping invalid lead bytes one at a time.
///
/// Lead bytes select 1 to 4 byte sequences. Continuation bytes are taken as
/// given (only their low six bits are used). A lead byte whose sequence would
/// run past the end of the input, or any byte that is not a valid lead, is
/// dropped and decoding resumes at the next byte.
pub fn decode_utf8(bytes: &[u8]) -> Vec<u32> {
    let cont = |b: u8| u32::from(b & 0x3F);

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let remaining = bytes.len() - i;
        if c < 0x80 {
            out.push(u32::from(c));
            i += 1;
        } else if c >> 5 == 0x6 && remaining >= 2 {
            out.push((u32::from(c & 0x1F) << 6) | cont(bytes[i + 1]));
            i += 2;
        } else if c >> 4 == 0xE && remaining >= 3 {
            out.push((u32::from(c & 0x0F) << 12) | (cont(bytes[i + 1]) << 6) | cont(bytes[i + 2]));
            i += 3;
        } else if c >> 3 == 0x1E && remaining >= 4 {
            out.push(
                (u32::from(c & 0x07) << 18)
                    | (cont(bytes[i + 1]) << 12)
                    | (cont(bytes[i + 2]) << 6)
                    | cont(bytes[i + 3]),
            );
            i += 4;
        } else {
            i += 1;
        }
    }
    out
}
