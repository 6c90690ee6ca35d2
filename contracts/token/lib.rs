#![cfg_attr(not(feature = "std"), no_std)]

#[ink::contract]
mod token {
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        ZeroAddress,
        InsufficientBalance,
        InsufficientAllowance,
        Unauthorized,
        ArrayLengthMismatch,
        EmptyInput,
        Overflow,
    }

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: AccountId,
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Minted {
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(storage)]
    pub struct Token {
        // metadata, fixed at deploy
        token_name: String,
        token_symbol: String,
        token_decimals: u8,

        // governance
        owner_acc: AccountId,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    impl Token {
        // -------- constructors --------

        /// Deploys with `initial_supply` whole tokens, scaled by
        /// `10^token_decimals` and credited to the deployer, who also
        /// becomes the owner.
        #[ink(constructor)]
        pub fn new(
            token_name: String,
            token_symbol: String,
            token_decimals: u8,
            initial_supply: Balance,
        ) -> Result<Self> {
            let unit = 10u128
                .checked_pow(u32::from(token_decimals))
                .ok_or(Error::Overflow)?;
            let total_supply = initial_supply.checked_mul(unit).ok_or(Error::Overflow)?;

            let caller_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&caller_acc, &total_supply);

            Self::env().emit_event(Transferred {
                from_acc: Self::zero_account(),
                to_acc: caller_acc,
                amount: total_supply,
            });

            Ok(Self {
                token_name,
                token_symbol,
                token_decimals,
                owner_acc: caller_acc,
                total_supply,
                balances,
                allowances: Mapping::default(),
            })
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::Unauthorized)
            }
            Ok(())
        }

        fn zero_account() -> AccountId {
            AccountId::from([0x00; 32])
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.token_name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.token_symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            self.token_decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        /// Named balance query; same result as `balance_of`.
        #[ink(message)]
        pub fn get_balance(&self, owner_acc: AccountId) -> Balance {
            self.balance_of(owner_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        /// Named allowance query; same result as `allowance`.
        #[ink(message)]
        pub fn get_allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowance(owner_acc, spender_acc)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            if to_acc == Self::zero_account() {
                return Err(Error::ZeroAddress)
            }
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        /// Overwrites the previous allowance; not additive.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            self.allowances.insert(&(owner_acc, spender_acc), &amount);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount });
            Ok(())
        }

        /// Caller spends from `from_acc` against the allowance granted to
        /// the caller. Allowance and balances move as one unit.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            let current_allow = self.allowances.get(&(from_acc, spender_acc)).unwrap_or(0);
            if current_allow < amount {
                return Err(Error::InsufficientAllowance)
            }
            if self.balance_of(from_acc) < amount {
                return Err(Error::InsufficientBalance)
            }
            if to_acc == Self::zero_account() {
                return Err(Error::ZeroAddress)
            }

            let new_allow = current_allow.checked_sub(amount).ok_or(Error::Overflow)?;
            self.allowances.insert(&(from_acc, spender_acc), &new_allow);

            self.move_balance(from_acc, to_acc, amount)
        }

        /// All-or-nothing multi-recipient transfer. Every pair is validated
        /// against the caller's running balance before any write, so a
        /// failing pair leaves the whole batch unapplied.
        #[ink(message)]
        pub fn batch_transfer(
            &mut self,
            to_accs: Vec<AccountId>,
            amounts: Vec<Balance>,
        ) -> Result<()> {
            if to_accs.len() != amounts.len() {
                return Err(Error::ArrayLengthMismatch)
            }
            if to_accs.is_empty() {
                return Err(Error::EmptyInput)
            }

            let from_acc = self.env().caller();
            let mut running_bal = self.balance_of(from_acc);
            for (to_acc, amount) in to_accs.iter().zip(amounts.iter()) {
                if *to_acc == Self::zero_account() {
                    return Err(Error::ZeroAddress)
                }
                if running_bal < *amount {
                    return Err(Error::InsufficientBalance)
                }
                running_bal = running_bal.checked_sub(*amount).ok_or(Error::Overflow)?;
            }

            for (to_acc, amount) in to_accs.iter().zip(amounts.iter()) {
                self.move_balance(from_acc, *to_acc, *amount)?;
            }
            Ok(())
        }

        /// Owner-only supply expansion.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.only_owner()?;
            if to_acc == Self::zero_account() {
                return Err(Error::ZeroAddress)
            }

            let new_total = self.total_supply.checked_add(amount).ok_or(Error::Overflow)?;
            self.total_supply = new_total;

            let to_bal = self.balances.get(&to_acc).unwrap_or(0);
            let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Minted { to_acc, amount });
            self.env().emit_event(Transferred {
                from_acc: Self::zero_account(),
                to_acc,
                amount,
            });
            Ok(())
        }

        /// Owner-only. The previous owner loses all privilege the moment
        /// this returns.
        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            if new_owner_acc == Self::zero_account() {
                return Err(Error::ZeroAddress)
            }
            self.owner_acc = new_owner_acc;
            Ok(())
        }

        // ---- internals ----

        fn move_balance(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            let from_bal = self.balances.get(&from_acc).unwrap_or(0);
            if from_bal < amount {
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&from_acc, &new_from);

            let to_bal = self.balances.get(&to_acc).unwrap_or(0);
            let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Transferred { from_acc, to_acc, amount });
            Ok(())
        }
    }

}
