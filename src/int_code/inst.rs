use std::collections::HashMap;

use int_enum::IntEnum;
use once_cell::sync::Lazy;

use crate::Error;

/// Length of an instruction taking two inputs and one output address.
pub const BINARY_INST_LEN: usize = 4;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum, Hash)]
pub enum InstOpcode {
    Add = 1,
    Multiply = 2,
    Halt = 99,
}

type BinaryOp = fn(i64, i64) -> Option<i64>;
static BINARY_OP_MAP: Lazy<HashMap<InstOpcode, BinaryOp>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(InstOpcode::Add, i64::checked_add as BinaryOp);
    map.insert(InstOpcode::Multiply, i64::checked_mul as BinaryOp);

    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add { lhs: i64, rhs: i64, dest: i64 },
    Multiply { lhs: i64, rhs: i64, dest: i64 },
    Halt,
}

/// What the computer should do after an instruction ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Advance(usize),
    Halt,
}

impl Instruction {
    pub fn opcode(&self) -> InstOpcode {
        match self {
            Instruction::Add { .. } => InstOpcode::Add,
            Instruction::Multiply { .. } => InstOpcode::Multiply,
            Instruction::Halt => InstOpcode::Halt,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        match self {
            Instruction::Halt => 1,
            _ => BINARY_INST_LEN,
        }
    }

    /// Run the instruction found at `pos` against `image`.
    pub fn execute(&self, image: &mut [i64], pos: usize) -> Result<Flow, Error> {
        let (lhs, rhs, dest) = match *self {
            Instruction::Add { lhs, rhs, dest } | Instruction::Multiply { lhs, rhs, dest } => {
                (lhs, rhs, dest)
            }
            Instruction::Halt => return Ok(Flow::Halt),
        };

        let op = BINARY_OP_MAP
            .get(&self.opcode())
            .ok_or(Error::InvalidOpcode {
                value: i64::from(self.opcode().int_value()),
                pos,
            })?;
        let input0 = read_image(image, lhs, pos)?;
        let input1 = read_image(image, rhs, pos)?;
        let output = op(input0, input1).ok_or(Error::ArithmeticOverflow(pos))?;
        write_image(image, dest, pos, output)?;

        Ok(Flow::Advance(self.length()))
    }
}

pub fn parse_cur_inst(image: &[i64], pos: usize) -> Result<Instruction, Error> {
    let value = *image
        .get(pos)
        .ok_or(Error::ExecutionExceedIntCode(pos, image.len()))?;
    let opcode = u8::try_from(value)
        .ok()
        .and_then(|n| InstOpcode::from_int(n).ok())
        .ok_or(Error::InvalidOpcode { value, pos })?;

    if opcode == InstOpcode::Halt {
        return Ok(Instruction::Halt);
    }

    // Skip operation code
    let params = image
        .get(pos + 1..pos + BINARY_INST_LEN)
        .ok_or(Error::MissingCodeForInstruction(value, pos))?;
    let &[lhs, rhs, dest] = params else {
        return Err(Error::MissingCodeForInstruction(value, pos));
    };

    Ok(match opcode {
        InstOpcode::Add => Instruction::Add { lhs, rhs, dest },
        InstOpcode::Multiply => Instruction::Multiply { lhs, rhs, dest },
        InstOpcode::Halt => Instruction::Halt,
    })
}

fn image_index(image: &[i64], addr: i64, pos: usize) -> Result<usize, Error> {
    usize::try_from(addr)
        .ok()
        .filter(|&i| i < image.len())
        .ok_or(Error::ImageIndexError {
            addr,
            pos,
            len: image.len(),
        })
}

fn read_image(image: &[i64], addr: i64, pos: usize) -> Result<i64, Error> {
    image_index(image, addr, pos).map(|i| image[i])
}

fn write_image(image: &mut [i64], addr: i64, pos: usize, value: i64) -> Result<(), Error> {
    let i = image_index(image, addr, pos)?;
    image[i] = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_add_multiply_halt() {
        let image = [1, 4, 5, 6, 2, 7, 8, 9, 99];
        assert_eq!(
            parse_cur_inst(&image, 0).unwrap(),
            Instruction::Add { lhs: 4, rhs: 5, dest: 6 }
        );
        assert_eq!(
            parse_cur_inst(&image, 4).unwrap(),
            Instruction::Multiply { lhs: 7, rhs: 8, dest: 9 }
        );
        assert_eq!(parse_cur_inst(&image, 8).unwrap(), Instruction::Halt);
    }

    #[test]
    fn decode_unknown_opcode() {
        let image = [1, 0, 0, 0, 42, 0, 0, 0];
        match parse_cur_inst(&image, 4) {
            Err(Error::InvalidOpcode { value, pos }) => assert_eq!((value, pos), (42, 4)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_cur_inst(&[-1], 0),
            Err(Error::InvalidOpcode { value: -1, pos: 0 })
        ));
        assert!(matches!(
            parse_cur_inst(&[1001], 0),
            Err(Error::InvalidOpcode { value: 1001, pos: 0 })
        ));
    }

    #[test]
    fn decode_truncated_instruction() {
        assert!(matches!(
            parse_cur_inst(&[2, 0, 0], 0),
            Err(Error::MissingCodeForInstruction(2, 0))
        ));
    }

    #[test]
    fn decode_past_end() {
        assert!(matches!(
            parse_cur_inst(&[1, 0, 0, 0], 4),
            Err(Error::ExecutionExceedIntCode(4, 4))
        ));
    }

    #[test]
    fn execute_writes_destination() {
        let mut image = vec![2, 4, 4, 5, 99, 0];
        let inst = parse_cur_inst(&image, 0).unwrap();
        assert_eq!(inst.execute(&mut image, 0).unwrap(), Flow::Advance(4));
        assert_eq!(image, vec![2, 4, 4, 5, 99, 9801]);
    }

    #[test]
    fn execute_out_of_bounds() {
        let mut image = vec![1, 0, 7, 0, 99];
        let inst = parse_cur_inst(&image, 0).unwrap();
        match inst.execute(&mut image, 0) {
            Err(Error::ImageIndexError { addr, pos, len }) => assert_eq!((addr, pos, len), (7, 0, 5)),
            other => panic!("unexpected result: {:?}", other),
        }

        let mut image = vec![1, 0, 0, -3, 99];
        let inst = parse_cur_inst(&image, 0).unwrap();
        assert!(matches!(
            inst.execute(&mut image, 0),
            Err(Error::ImageIndexError { addr: -3, .. })
        ));
        assert_eq!(image, vec![1, 0, 0, -3, 99]);
    }

    #[test]
    fn execute_overflow() {
        let mut image = vec![2, 4, 4, 0, i64::MAX];
        let inst = parse_cur_inst(&image, 0).unwrap();
        assert!(matches!(
            inst.execute(&mut image, 0),
            Err(Error::ArithmeticOverflow(0))
        ));
    }

    #[test]
    fn halt_leaves_memory_alone() {
        let mut image = vec![99, 1, 2];
        assert_eq!(Instruction::Halt.execute(&mut image, 0).unwrap(), Flow::Halt);
        assert_eq!(image, vec![99, 1, 2]);
    }
}
