pub mod p001_pizza_prices;
