//! Main menu entries.

use core::str::FromStr;

pub const MENU: &str = "\n---- Bank Management System ----\n\
1. Open Account\n\
2. Deposit Money\n\
3. Withdraw Money\n\
4. Display Account\n\
5. Close Account\n\
6. Display All Accounts\n\
7. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OpenAccount,
    Deposit,
    Withdraw,
    DisplayAccount,
    CloseAccount,
    DisplayAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>().map_err(|_| ())? {
            1 => Ok(MenuChoice::OpenAccount),
            2 => Ok(MenuChoice::Deposit),
            3 => Ok(MenuChoice::Withdraw),
            4 => Ok(MenuChoice::DisplayAccount),
            5 => Ok(MenuChoice::CloseAccount),
            6 => Ok(MenuChoice::DisplayAll),
            7 => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}
