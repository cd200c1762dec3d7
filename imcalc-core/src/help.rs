// Help text for the command grammar

pub const HELP_TEXT: &str = "\
This program is a calculator that can perform functions on complex numbers.
For any complex number in the form a+bi where a and b are real numbers:
a+bi + c+di     -> sum
a+bi - c+di     -> difference
a+bi * c+di     -> product
a+bi / c+di     -> quotient
a+bi == c+di    -> equality
a+bi != c+di    -> inequality
- a+bi          -> negation
conj a+bi       -> conjugate
mag a+bi        -> magnitude
arg a+bi        -> angle (argument)
abs_sqd a+bi    -> magnitude squared
to_plr a+bi     -> polar form
pow e a+bi      -> raise to integer power
frm_plr r theta -> Cartesian from polar (r, theta)
Use '<' in place of a complex number to use the previous answer";

pub const BANNER: &str = "\
IMAGINARY NUMBER CALCULATOR
Enter HELP for overview of options
Enter QUIT to stop program";
