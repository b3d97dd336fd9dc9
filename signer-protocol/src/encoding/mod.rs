use crate::encoding::error::{Error, Result};
use bytes::{Buf, BufMut};

pub mod encoded_size;
pub mod error;

pub type EncoderVecLen = u32;

pub trait Encoder {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut;
}

pub trait Decoder: Sized {
    fn decode<B>(buf: &mut B) -> Result<Self>
    where
        B: Buf;
}

pub(crate) fn ensure_writable<B: BufMut>(buf: &B, needed: usize, what: &str) -> Result<()> {
    if buf.remaining_mut() < needed {
        return Err(Error::encoding(format!(
            "Can't encode {}: {} bytes needed, {} available",
            what,
            needed,
            buf.remaining_mut()
        )));
    }
    Ok(())
}

pub(crate) fn ensure_readable<B: Buf>(buf: &B, needed: usize, what: &str) -> Result<()> {
    if buf.remaining() < needed {
        return Err(Error::decoding(format!(
            "Can't decode {}: {} bytes needed, {} available",
            what,
            needed,
            buf.remaining()
        )));
    }
    Ok(())
}

macro_rules! impl_codec_for_int {
    ($($ty:ty, $put:ident, $get:ident);+$(;)?) => {
        $(
            impl Encoder for $ty {
                fn encode<B>(&self, buf: &mut B) -> Result<()>
                where
                    B: BufMut,
                {
                    ensure_writable(buf, std::mem::size_of::<$ty>(), stringify!($ty))?;
                    buf.$put(*self);
                    Ok(())
                }
            }

            impl Decoder for $ty {
                fn decode<B>(buf: &mut B) -> Result<Self>
                where
                    B: Buf,
                {
                    ensure_readable(buf, std::mem::size_of::<$ty>(), stringify!($ty))?;
                    Ok(buf.$get())
                }
            }
        )+
    };
}

impl_codec_for_int! {
    u8, put_u8, get_u8;
    u16, put_u16, get_u16;
    u32, put_u32, get_u32;
    u64, put_u64, get_u64;
    u128, put_u128, get_u128;
}

impl Encoder for bool {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        u8::from(*self).encode(buf)
    }
}

impl Decoder for bool {
    fn decode<B>(buf: &mut B) -> Result<Self>
    where
        B: Buf,
    {
        match u8::decode(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::decoding(format!(
                "Can't decode {} as bool",
                other
            ))),
        }
    }
}

fn encode_len<B: BufMut>(len: usize, buf: &mut B) -> Result<()> {
    let len = EncoderVecLen::try_from(len).map_err(|e| {
        Error::encoding_with_cause(format!("length {} exceeds {}", len, EncoderVecLen::MAX), e)
    })?;
    len.encode(buf)
}

impl Encoder for [u8] {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        ensure_writable(
            buf,
            std::mem::size_of::<EncoderVecLen>() + self.len(),
            "bytes",
        )?;
        encode_len(self.len(), buf)?;
        buf.put_slice(self);
        Ok(())
    }
}

impl Encoder for Vec<u8> {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        self.as_slice().encode(buf)
    }
}

impl Decoder for Vec<u8> {
    fn decode<B>(buf: &mut B) -> Result<Self>
    where
        B: Buf,
    {
        let len = EncoderVecLen::decode(buf)? as usize;
        ensure_readable(buf, len, "bytes")?;
        let mut bytes = vec![0; len];
        buf.copy_to_slice(&mut bytes);
        Ok(bytes)
    }
}

impl Encoder for str {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        self.as_bytes().encode(buf)
    }
}

impl Encoder for String {
    fn encode<B>(&self, buf: &mut B) -> Result<()>
    where
        B: BufMut,
    {
        self.as_str().encode(buf)
    }
}

impl Decoder for String {
    fn decode<B>(buf: &mut B) -> Result<Self>
    where
        B: Buf,
    {
        String::from_utf8(Vec::<u8>::decode(buf)?)
            .map_err(|e| Error::decoding_with_cause("Can't decode string: invalid utf-8", e))
    }
}
