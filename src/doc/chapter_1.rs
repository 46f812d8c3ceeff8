/*!
# Commands

| Command | Effect |
|---------|--------|
| `!` | Add 1 to the active cell. |
| `~` | Subtract 1 from the active cell. |
| `+` | Add the inactive tape's cell to the active cell. |
| `-` | Subtract the inactive tape's cell from the active cell. |
| `*` | Multiply the active cell by the inactive tape's cell. |
| `/` | Divide the active cell by the inactive tape's cell. |
| `` ` `` | Store a random number between 0 (inclusive) and 1 (exclusive). |
| `>` | Move the cursor of the active tape right. |
| `<` | Move the cursor of the active tape left. |
| `^` | Switch the active tape. |
| `[` `]` | While loop. The body is skipped when the cell is 0. |
| `[@` `@]` | Do-while loop. The body always runs once. |
| `$.` | Read a number. |
| `$,` | Read a character and store its code point. |
| `\.` | Print the active cell as a number. |
| `\,` | Print the active cell as a character. |
| `;` | Swap the active cells of the global and local memories. |
| `_` `&` `?=` `?<` `?>` | Reserved. They do nothing. |

`$` and `\` only form a command together with `.` or `,`. Any other
character after them, as in `$x` or `\!`, is a syntax error rather than
a command that does nothing.

Numbers print with at least one decimal, and in exponent form from `1e+16`
up and below `0.0001`: `3.0`, `0.5`, `1e+20`, `2.5e-07`, `inf`, `nan`.

## Repeats

`!`, `~`, `+`, `-`, `*`, `/`, `>` and `<` accept a repeat count between
bars placed before the command: `|5|>` moves five cells right. A negative
count runs the opposite command instead, so `|-2|!` is the same as `|2|~`.
The pairs are `!`/`~`, `+`/`-`, `*`/`/` and `>`/`<`. Leaving out the
number, as in `||!`, uses the floor of the active cell as the count. A
cell holding an infinity or NaN can not be used as a count and stops the
program with `INVALID NUMBER`. Moving left past the first cell warns once
per command, however many times it repeats.

## Local memory

Every command except `;` may be prefixed with `'` to act on the local
memory. Loops read the cell of the memory they belong to, and a local
bracket only pairs with a local bracket of the same kind.

```text
'|3|! '[ \. '~ ']:
```

## Comments

Text between double quotes is ignored and may span lines. A double
quote without a closing partner comments out the rest of the file.

## Errors

Errors are reported with the line and column they happened at.

```text
UNMATCHED BRACKET AT 1:3 IN maumivu.au
```

Moving left of the first cell of a tape is not an error. The tape grows
and a warning is printed, which `--disable-too-left-pointer-warning`
or `--disable-warnings` silence.

*/
