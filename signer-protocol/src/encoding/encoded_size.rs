use crate::encoding::EncoderVecLen;

pub trait EncodedSize {
    fn encoded_size(&self) -> usize;
}

macro_rules! impl_encoded_size {
    ($($ty:ty);+$(;)?) => {
        $(impl EncodedSize for $ty  {
            #[inline]
             fn encoded_size(&self) -> usize{
                 std::mem::size_of::<$ty>()
             }
        })+
    };
    ($($ty:ty,$encoded_size:expr);+$(;)?) => {
        $(impl EncodedSize for $ty  {
            #[inline]
             fn encoded_size(&self) -> usize{
                 $encoded_size
             }
        })+
    };
}

impl_encoded_size! {
    u8;
    u16;
    u32;
    u64;
    u128;
}
impl_encoded_size! {
    bool,std::mem::size_of::<u8>();
}

impl EncodedSize for [u8] {
    fn encoded_size(&self) -> usize {
        std::mem::size_of::<EncoderVecLen>() + self.len()
    }
}

impl EncodedSize for Vec<u8> {
    fn encoded_size(&self) -> usize {
        self.as_slice().encoded_size()
    }
}

impl EncodedSize for str {
    fn encoded_size(&self) -> usize {
        self.as_bytes().encoded_size()
    }
}

impl EncodedSize for String {
    fn encoded_size(&self) -> usize {
        self.as_str().encoded_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Decoder, Encoder};

    #[test]
    fn encode_size() {
        let mut buffer = [0u8; 64];
        let str = String::from("Hello world");
        str.encode(&mut &mut buffer[..]).unwrap();
        assert_eq!(str.encoded_size(), 15);
        assert_eq!(
            String::decode(&mut &buffer[..str.encoded_size()]).unwrap(),
            str
        );
    }

    #[test]
    fn sizes_match_written_bytes() {
        let mut buffer = Vec::new();
        true.encode(&mut buffer).unwrap();
        42u64.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len(), true.encoded_size() + 42u64.encoded_size());
    }
}
